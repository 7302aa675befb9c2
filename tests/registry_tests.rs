use iban_validator::*;

#[test]
fn supported_countries_sorted_and_unique() {
    let countries = supported_countries();
    for window in countries.windows(2) {
        assert!(window[0].code < window[1].code);
    }
}

#[test]
fn every_entry_is_reachable_by_lookup() {
    for country in supported_countries() {
        assert_eq!(lookup(country.code), Some(country));
        assert!(is_supported_country(country.code));
    }
}

#[test]
fn registered_lengths() {
    let expected = [
        ("AD", 24),
        ("BE", 16),
        ("BR", 29),
        ("CH", 21),
        ("DE", 22),
        ("FR", 27),
        ("GB", 22),
        ("LC", 32),
        ("MT", 31),
        ("NL", 18),
        ("NO", 15),
        ("SE", 24),
        ("TR", 26),
        ("UA", 29),
        ("XK", 20),
    ];
    for (code, length) in expected {
        assert_eq!(lookup(code).unwrap().length, length, "{code}");
    }
}

#[test]
fn shortest_and_longest() {
    let lengths = supported_countries().iter().map(|c| c.length);
    assert_eq!(lengths.clone().min(), Some(15));
    assert_eq!(lengths.max(), Some(32));
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(lookup("de").is_none());
    assert!(lookup("De").is_none());
}

#[test]
fn non_iban_countries_absent() {
    for code in ["US", "CA", "JP", "CN", "AU", "IN", "ZZ"] {
        assert!(!is_supported_country(code), "{code}");
    }
}

#[test]
fn country_info_from_raw_input() {
    let info = country_info("gb82 west").unwrap();
    assert_eq!(info.name, "United Kingdom");
    assert_eq!(info.length, 22);
}

#[test]
fn flags_are_regional_indicators() {
    for country in supported_countries() {
        let flag = country.flag();
        assert_eq!(flag.chars().count(), 2, "{}", country.code);
        assert!(
            flag.chars()
                .all(|c| ('\u{1F1E6}'..='\u{1F1FF}').contains(&c))
        );
    }
}

#[test]
fn country_format_serializes() {
    let json = serde_json::to_value(lookup("DE").unwrap()).unwrap();
    assert_eq!(json["code"], "DE");
    assert_eq!(json["length"], 22);
    assert_eq!(json["name"], "Germany");
}

#[test]
fn concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100)
                    .map(|_| validate("DE89370400440532013000").is_ok())
                    .all(|ok| ok)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
