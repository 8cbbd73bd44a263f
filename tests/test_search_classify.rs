use tx_dashboard::dashboard::filter::{classify_search_text, FilterSpec, ADDRESS_LENGTH_THRESHOLD};

#[test]
fn test_numeric_text_is_id() {
    assert_eq!(classify_search_text("12345"), FilterSpec::ById(12345));
    assert_eq!(classify_search_text("  7  "), FilterSpec::ById(7));
}

#[test]
fn test_long_text_is_address_substring() {
    // 40位十六进制地址
    let addr = "71c7656ec7ab88b098defb751b7401b5f6d8976f";
    assert_eq!(addr.len(), 40);
    assert_eq!(
        classify_search_text(addr),
        FilterSpec::ByAddressSubstring(addr.to_string())
    );
}

#[test]
fn test_short_text_is_trade_type() {
    assert_eq!(
        classify_search_text("buy"),
        FilterSpec::ByTradeType("buy".to_string())
    );
}

#[test]
fn test_length_threshold_boundary() {
    // 阈值是"超过30字符"：恰好30按交易类型，31按地址子串
    let exactly_30 = "a".repeat(ADDRESS_LENGTH_THRESHOLD);
    assert_eq!(
        classify_search_text(&exactly_30),
        FilterSpec::ByTradeType(exactly_30.clone())
    );

    let thirty_one = "a".repeat(ADDRESS_LENGTH_THRESHOLD + 1);
    assert_eq!(
        classify_search_text(&thirty_one),
        FilterSpec::ByAddressSubstring(thirty_one.clone())
    );
}

#[test]
fn test_priority_order() {
    // 纯数字优先于长度规则：31位数字串仍然不是ById（溢出i64），
    // 落到长度规则按地址子串处理
    let digits_31 = "9".repeat(31);
    assert_eq!(
        classify_search_text(&digits_31),
        FilterSpec::ByAddressSubstring(digits_31.clone())
    );

    // 混入字母的短串按交易类型
    assert_eq!(
        classify_search_text("123abc"),
        FilterSpec::ByTradeType("123abc".to_string())
    );
}

#[test]
fn test_blank_clears_filter() {
    assert_eq!(classify_search_text(""), FilterSpec::None);
    assert_eq!(classify_search_text("   "), FilterSpec::None);
}
