use chrono::{DateTime, Duration, TimeZone, Utc};

/// 把时间戳向下取整到所在小时的起点
pub fn floor_to_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    let secs = ts.timestamp();
    Utc.timestamp_opt(secs - secs.rem_euclid(3600), 0)
        .single()
        .unwrap_or(ts)
}

/// 格式化为 "YYYY-MM-DD HH:MM:SS"
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 小时桶标签，只展示 HH:MM
pub fn hour_label(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// 相对时间描述，行情滚动条展示用
pub fn relative_from(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(ts);
    let mins = diff.num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return format!("{} mins ago", mins);
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    format!("{} days ago", diff.num_days())
}

pub fn relative_from_now(ts: DateTime<Utc>) -> String {
    relative_from(ts, Utc::now())
}
