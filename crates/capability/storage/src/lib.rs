//! # 快照存储模块
//!
//! 本模块提供统一的快照存储抽象层。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：定义快照存储的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：定义存储相关的数据结构
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **实现层** (`in_memory/`)：内存存储实现（演示和测试）
//!
//! ## 核心特性
//!
//! - **快照语义**：`StateStore`/`RegistryStore` 只交付某一时刻的只读视图；
//!   授权记录与注册表由外部组件（权限管理器、注册设施）拥有和变更，
//!   本系统只读不写
//! - **每次调用重新取快照**：不跨调用缓存，调用之间外部组件可能已变更数据
//! - **不可用即失败**：快照源不可用（锁中毒等）作为 `StorageError` 向上传播，
//!   绝不掩盖为空结果
//!
//! ## 存储实现
//!
//! - [`in_memory`]：`RwLock` 保护的内存实现，充当外部设施的本地替身，
//!   适用于单元测试、集成测试和演示部署；提供种子写入用的变更方法

pub mod error;
pub mod in_memory;
pub mod models;
pub mod traits;

pub use error::*;
pub use models::*;
pub use traits::*;

pub use in_memory::{InMemoryRegistryStore, InMemoryStateStore, InMemoryUserStore};
