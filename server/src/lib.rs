//! Refugio Server - 宠物领养管理系统后端
//!
//! # 架构概述
//!
//! 本模块是后端服务的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **数据库** (`db`): SQLite (sqlx) 存储与按实体划分的仓储层
//! - **HTTP API** (`api`): RESTful API 接口
//! - **业务服务** (`services`): 身份验证、通知、文件沙箱
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # JWT 认证、中间件
//! ├── services/      # 身份验证、通知、文件存储
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use crate::services::{ArchivoStorage, AutenticacionService, NotificacionService, TipoArchivo};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置进程环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present (ignore errors: production uses real env vars)
    let _ = dotenv::dotenv();

    utils::logger::init_logger();

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____       ____            _
   / __ \___  / __/_  ______ _(_)___
  / /_/ / _ \/ /_/ / / / __ `/ / __ \
 / _, _/  __/ __/ /_/ / /_/ / / /_/ /
/_/ |_|\___/_/  \__,_/\__, /_/\____/
                     /____/
    "#
    );
}
