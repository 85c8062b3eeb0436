// handler/materials.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::materialdb::MaterialExt,
    dtos::{
        common::ApiResponse, common::PaginatedResponse, common::RequestQueryDto, materialdtos::*,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn materials_handler() -> Router {
    Router::new()
        .route("/", post(create_material).get(list_materials))
        .route("/low-stock", get(list_low_stock_materials))
        .route(
            "/:material_id",
            get(get_material)
                .put(update_material)
                .delete(delete_material),
        )
}

pub fn suppliers_handler() -> Router {
    Router::new()
        .route("/", post(create_supplier).get(list_suppliers))
        .route(
            "/:supplier_id",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
}

// Material handlers
pub async fn create_material(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateMaterialDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let material = app_state
        .db_client
        .create_material(
            body.name,
            body.category,
            body.brand,
            body.spec,
            body.unit,
            body.unit_price,
            body.stock_quantity,
            body.low_stock_threshold,
            body.supplier_id,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Material created successfully",
        material,
    )))
}

pub async fn list_materials(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<MaterialListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let materials = app_state
        .db_client
        .get_materials(query.category, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_materials(query.category)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        materials,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn list_low_stock_materials(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let materials = app_state
        .db_client
        .get_low_stock_materials()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Low stock materials retrieved successfully",
        materials,
    )))
}

pub async fn get_material(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(material_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let material = app_state
        .db_client
        .get_material(material_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Material retrieved successfully",
        material,
    )))
}

pub async fn update_material(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(material_id): Path<Uuid>,
    Json(body): Json<UpdateMaterialDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let material = app_state
        .db_client
        .update_material(
            material_id,
            body.name,
            body.category,
            body.brand,
            body.spec,
            body.unit,
            body.unit_price,
            body.stock_quantity,
            body.low_stock_threshold,
            body.supplier_id,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Material updated successfully",
        material,
    )))
}

pub async fn delete_material(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(material_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_material(material_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Material deleted successfully",
        (),
    )))
}

// Supplier handlers
pub async fn create_supplier(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateSupplierDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let supplier = app_state
        .db_client
        .create_supplier(
            body.name,
            body.contact_name,
            body.phone,
            body.address,
            body.category,
            body.notes,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Supplier created successfully",
        supplier,
    )))
}

pub async fn list_suppliers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query.page_or_default();
    let limit = query.limit_or_default();

    let suppliers = app_state
        .db_client
        .get_suppliers(limit as i64, query.offset())
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_suppliers()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(suppliers, total, page, limit)))
}

pub async fn get_supplier(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(supplier_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let supplier = app_state
        .db_client
        .get_supplier(supplier_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Supplier retrieved successfully",
        supplier,
    )))
}

pub async fn update_supplier(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(supplier_id): Path<Uuid>,
    Json(body): Json<UpdateSupplierDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let supplier = app_state
        .db_client
        .update_supplier(
            supplier_id,
            body.name,
            body.contact_name,
            body.phone,
            body.address,
            body.category,
            body.rating,
            body.notes,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Supplier updated successfully",
        supplier,
    )))
}

pub async fn delete_supplier(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(supplier_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_supplier(supplier_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Supplier deleted successfully",
        (),
    )))
}
