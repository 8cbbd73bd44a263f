use std::future::Future;
use std::time::Duration;

use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use uuid::Uuid;

struct ScheduledTask {
    name: String,
    handle: JoinHandle<()>,
}

/// 定时任务调度器：所有周期任务由它统一持有句柄，
/// 生命周期明确（注册/关停），不留游离的定时器。
/// 各任务各自独立的tokio任务里跑，互不阻塞。
pub struct TaskScheduler {
    tasks: DashMap<Uuid, ScheduledTask>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self {
            tasks: DashMap::new(),
        }
    }

    /// 注册一个周期任务。首个tick立即触发，之后按period_ms间隔。
    /// 回调本身应当是快速返回的（长耗时的拉取在回调里spawn出去），
    /// 避免单个周期内的慢响应拖住后续tick。
    pub fn add_periodic_task<F, Fut>(&mut self, name: String, period_ms: u64, mut task: F) -> Uuid
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task_name = name.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(period_ms));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                debug!("定时任务触发: {}", task_name);
                task().await;
            }
        });

        let id = Uuid::new_v4();
        self.tasks.insert(id, ScheduledTask { name, handle });
        id
    }

    /// 移除并终止单个任务
    pub fn remove_task(&mut self, id: Uuid) -> bool {
        match self.tasks.remove(&id) {
            Some((_, task)) => {
                task.handle.abort();
                debug!("定时任务已移除: {}", task.name);
                true
            }
            None => false,
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// 关停全部任务
    pub async fn shutdown(&mut self) {
        let ids: Vec<Uuid> = self.tasks.iter().map(|e| *e.key()).collect();
        for id in ids {
            if let Some((_, task)) = self.tasks.remove(&id) {
                task.handle.abort();
                info!("定时任务已关停: {}", task.name);
            }
        }
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}
