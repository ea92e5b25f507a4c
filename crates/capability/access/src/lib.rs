//! # 访问解析能力
//!
//! 按用户、按区域的可见性解析引擎，分四层：
//!
//! 1. **授权扫描** (`grants`)：从状态快照中按命名约定发现授权记录，
//!    解析为类型化授权（约定解析的脆弱性隔离在这一个边界模块）
//! 2. **归属解析** (`membership`)：实体的有效区域计算
//!    （直接分配优先，否则回退所属设备的区域）
//! 3. **区域聚合** (`areas`)：按调用者合并区域元数据、实体计数与权限级别
//! 4. **查询服务** (`query`)：两个查询操作的认证/校验/授权短路出口
//!
//! ## 设计约束
//!
//! - 所有函数都是对已获取快照的纯同步遍历，不持锁、不缓存、无跨调用状态
//! - 归属关系每次调用重新计算：注册表可能在两次调用之间被宿主系统修改，
//!   对授权相关视图而言过期数据不可接受
//! - 畸形/残缺的上游数据一律收敛为"无授权"/"无归属"并静默排除，
//!   绝不报错，也绝不扩大访问（宁缺毋滥）

pub mod areas;
pub mod grants;
pub mod membership;
pub mod query;

pub use areas::{AreaSummary, resolve_areas_for_caller};
pub use grants::{PermittedArea, scan_grants, scan_permitted_areas};
pub use membership::{effective_area, entities_by_area, entity_counts_per_area};
pub use query::{QueryError, get_area_entities, get_permitted_areas};
