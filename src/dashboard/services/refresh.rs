use std::sync::atomic::{AtomicU64, Ordering};

/// 刷新类别，每类各自独立计数，互不阻塞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    History,
    Chart,
    Ticker,
    Health,
}

/// 单调递增的刷新序号器。
/// 同类刷新可以重叠发出，不取消在途请求；响应只有携带
/// "当前已发出的最大序号"才允许写入共享视图，迟到的旧响应直接丢弃，
/// 把含糊的"最后返回者生效"换成确定的"最后发出者生效"。
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发出一次新刷新，返回其序号
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 响应到达时调用：只有序号等于当前最大已发序号、且比已应用的新，
    /// 才返回 true 并推进已应用水位
    pub fn try_apply(&self, seq: u64) -> bool {
        if seq != self.issued.load(Ordering::SeqCst) {
            return false;
        }
        let mut current = self.applied.load(Ordering::SeqCst);
        loop {
            if seq <= current {
                return false;
            }
            match self.applied.compare_exchange(
                current,
                seq,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn latest_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}
