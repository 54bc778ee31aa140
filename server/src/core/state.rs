use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{ArchivoStorage, AutenticacionService, NotificacionService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是后端的核心数据结构，使用 Arc / 连接池实现浅拷贝，
/// 克隆成本极低，每个请求处理器持有一份克隆。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | notificacion | NotificacionService | 邮件/短信通知 |
/// | archivos | ArchivoStorage | 文件沙箱存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 邮件/短信通知服务
    pub notificacion: NotificacionService,
    /// 文件沙箱存储
    pub archivos: ArchivoStorage,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(
        config: Config,
        pool: SqlitePool,
        jwt_service: Arc<JwtService>,
        notificacion: NotificacionService,
        archivos: ArchivoStorage,
    ) -> Self {
        Self {
            config,
            pool,
            jwt_service,
            notificacion,
            archivos,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/refugio.db, 自动迁移)
    /// 3. 各服务 (JWT, 通知, 文件存储)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        // 1. Initialize DB
        let db_path = config.database_dir().join("refugio.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");

        // 2. Initialize services
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let notificacion = NotificacionService::new(config.notificacion.clone());
        let archivos = ArchivoStorage::new(config.archivos_dir());

        Self::new(
            config.clone(),
            db_service.pool,
            jwt_service,
            notificacion,
            archivos,
        )
    }

    /// 获取连接池
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 创建身份验证服务
    pub fn autenticacion(&self) -> AutenticacionService {
        AutenticacionService::new(self.pool.clone())
    }
}
