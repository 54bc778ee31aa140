//! 业务服务模块
//!
//! # 服务列表
//!
//! - [`AutenticacionService`] - 身份验证与密码生成
//! - [`NotificacionService`] - 邮件/短信通知 (尽力而为)
//! - [`ArchivoStorage`] - 文件沙箱存储

pub mod archivos;
pub mod autenticacion;
pub mod notificacion;

pub use archivos::{ArchivoStorage, TipoArchivo};
pub use autenticacion::AutenticacionService;
pub use notificacion::{NotificacionConfig, NotificacionService};
