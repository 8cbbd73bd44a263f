use std::sync::RwLock;

use tracing::{debug, error};

use crate::dashboard::filter::FilterSpec;
use crate::dashboard::model::trades::TradesModel;
use crate::dashboard::query::{paginate, sort_records, Page, SortSpec};
use crate::dashboard::role::{annotate, matches_scope, RoleAnnotatedRecord, TradeRole};
use crate::dashboard::services::refresh::RefreshSequencer;
use crate::error::AppError;

/// 视图状态：空结果是正常结果，和错误态严格区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// 有数据
    Ready,
    /// 查询成功但没有命中记录
    Empty,
    /// 连接失败等错误，等下一次用户操作或定时刷新
    Error(String),
}

/// 历史视图查询参数
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub filter: FilterSpec,
    /// 被查询地址（钱包视角），为空时展示全部
    pub address: Option<String>,
    /// 指定角色时只保留该字段精确命中的记录
    pub role: Option<TradeRole>,
    pub sort: SortSpec,
    pub page: Page,
}

/// 对外的一页视图，行数和total出自同一次锁内读取，不会互相矛盾
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub rows: Vec<RoleAnnotatedRecord>,
    pub total: usize,
    pub page: Page,
    pub status: ViewStatus,
}

struct HistoryState {
    query: HistoryQuery,
    /// 过滤+角色筛选+排序后的完整集合，分页只在它上面切片
    rows: Vec<RoleAnnotatedRecord>,
    status: ViewStatus,
}

/// 历史表格背后的查询引擎。
/// 写入只发生在响应或定时器回调（单写者），读取方任意。
pub struct HistoryService {
    state: RwLock<HistoryState>,
    seq: RefreshSequencer,
    fetch_limit: u64,
}

impl HistoryService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(HistoryState {
                query: HistoryQuery::default(),
                rows: Vec::new(),
                status: ViewStatus::Empty,
            }),
            seq: RefreshSequencer::new(),
            fetch_limit: crate::DEFAULT_FETCH_LIMIT,
        }
    }

    /// 设置过滤条件：整体替换旧条件，页码归零
    pub fn set_filter(&self, filter: FilterSpec) {
        if let Ok(mut s) = self.state.write() {
            s.query.filter = filter;
            s.query.page.index = 0;
        }
    }

    /// 清除过滤条件
    pub fn clear_filter(&self) {
        self.set_filter(FilterSpec::None);
    }

    /// 设置查询范围（地址与可选角色）
    pub fn set_scope(&self, address: Option<String>, role: Option<TradeRole>) {
        if let Ok(mut s) = self.state.write() {
            s.query.address = address;
            s.query.role = role;
            s.query.page.index = 0;
        }
    }

    pub fn set_sort(&self, sort: SortSpec) {
        if let Ok(mut s) = self.state.write() {
            s.query.sort = sort;
        }
    }

    /// 翻页只重新切片，不重新拉取、不重新过滤
    pub fn set_page(&self, index: usize) {
        if let Ok(mut s) = self.state.write() {
            s.query.page.index = index;
        }
    }

    /// 改每页行数时页码归零
    pub fn set_page_size(&self, size: usize) {
        if let Ok(mut s) = self.state.write() {
            s.query.page.size = size;
            s.query.page.index = 0;
        }
    }

    pub fn query(&self) -> HistoryQuery {
        self.state
            .read()
            .map(|s| s.query.clone())
            .unwrap_or_default()
    }

    /// 重新拉取并重建视图。
    /// 过滤谓词下推给行存储执行，角色筛选在本地做（地址比较大小写
    /// 不敏感），随后整集排序。响应按序号判新旧，过期响应丢弃。
    pub async fn reload(&self) -> Result<(), AppError> {
        let query = self.query();
        let seq = self.seq.issue();

        let model = TradesModel::new();
        let fetched = model
            .fetch(&query.filter, &query.sort, self.fetch_limit)
            .await;

        match fetched {
            Ok((records, store_total)) => {
                debug!(
                    "history reload seq={} fetched={} store_total={}",
                    seq,
                    records.len(),
                    store_total
                );

                let mut records = match query.address.as_deref() {
                    Some(addr) => records
                        .into_iter()
                        .filter(|r| matches_scope(r, addr, query.role))
                        .collect(),
                    None => records,
                };
                sort_records(&mut records, &query.sort);
                let rows = annotate(records, query.address.as_deref());

                let mut s = self
                    .state
                    .write()
                    .map_err(|e| AppError::Unknown(e.to_string()))?;
                if !self.seq.try_apply(seq) {
                    debug!("history reload seq={} 已过期，丢弃", seq);
                    return Ok(());
                }
                s.status = if rows.is_empty() {
                    ViewStatus::Empty
                } else {
                    ViewStatus::Ready
                };
                s.rows = rows;
                Ok(())
            }
            Err(e) => {
                error!("history reload seq={} 失败: {}", seq, e);
                if let Ok(mut s) = self.state.write() {
                    if self.seq.try_apply(seq) {
                        s.rows.clear();
                        s.status = ViewStatus::Error(e.to_string());
                    }
                }
                Err(e)
            }
        }
    }

    /// 当前页视图
    pub fn view(&self) -> HistoryView {
        match self.state.read() {
            Ok(s) => HistoryView {
                rows: paginate(&s.rows, &s.query.page),
                total: s.rows.len(),
                page: s.query.page,
                status: s.status.clone(),
            },
            Err(_) => HistoryView {
                rows: Vec::new(),
                total: 0,
                page: Page::default(),
                status: ViewStatus::Error("state poisoned".to_string()),
            },
        }
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
