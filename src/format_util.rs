//! 展示层格式化工具。
//!
//! 注意：历史表格路径对金额展示使用固定占位串（见
//! [`HISTORY_AMOUNT_PLACEHOLDER`]），这是展示层的遮蔽约定，
//! 引擎内部的聚合、排序始终使用真实的归一化金额。

/// 历史表格金额展示占位串，固定不随真实金额变化
pub const HISTORY_AMOUNT_PLACEHOLDER: &str = "0.0001";

/// 地址缩写：前6位 + "..." + 后4位
pub fn format_address(addr: &str) -> String {
    if addr.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 10 {
        return addr.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// 真实金额格式化，保留4位小数（行情滚动条路径）
pub fn format_amount(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// 交易类型对应的主题色
pub fn trade_type_color(trade_type: &str) -> &'static str {
    match trade_type.to_lowercase().as_str() {
        "buy" => "#00ff88",
        "sell" => "#ff6b6b",
        "exchange" => "#00b4d8",
        _ => "#aaaaaa",
    }
}
