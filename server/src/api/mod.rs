//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口 (/identificar, /me)
//! - [`archivos`] - 文件列表与下载接口 (/files)
//! - [`roles`] - 角色管理接口
//! - [`usuarios`] - 用户管理接口 (含 /reset-password)
//! - [`personas`] - 领养人管理接口
//! - [`mascotas`] - 宠物管理接口
//! - [`razas`] - 品种管理接口
//! - [`solicitudes`] - 领养申请管理接口

pub mod archivos;
pub mod auth;
pub mod health;
pub mod roles;

// Data models API
pub mod mascotas;
pub mod personas;
pub mod razas;
pub mod solicitudes;
pub mod usuarios;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Count response used by the `/count` and bulk-update endpoints
#[derive(Debug, serde::Serialize)]
pub struct CountResponse {
    pub count: i64,
}

