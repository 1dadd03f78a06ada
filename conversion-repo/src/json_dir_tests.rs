//! JSON output directory tests.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use conversion_types::{
        Amount, ConversionDate, ConversionRecord, ConversionRequest, CurrencyCode, OutputStore,
    };
    use tempfile::tempdir;

    use crate::JsonOutputDir;

    fn record(
        amount: f64,
        base: CurrencyCode,
        target: CurrencyCode,
        converted: f64,
    ) -> ConversionRecord {
        let today = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let date = ConversionDate::resolve("2024-06-08", today).unwrap();
        let request = ConversionRequest::new(Amount::new(amount), base, target);
        ConversionRecord::new(date, &request, converted)
    }

    #[test]
    fn test_default_target() {
        let store = JsonOutputDir::new("output");
        assert_eq!(
            store.default_target(),
            std::path::Path::new("output").join("conversions.json")
        );
    }

    #[test]
    fn test_resolve_plain_names_only() {
        let store = JsonOutputDir::new("output");
        assert_eq!(
            store.resolve("june.json"),
            Some(std::path::Path::new("output").join("june.json"))
        );
        for bad in ["", ".", "..", "../escape.json", "nested/file.json", "/abs.json", "dir/"] {
            assert_eq!(store.resolve(bad), None, "{bad:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_pretty_prints() {
        let tmp = tempdir().unwrap();
        let store = JsonOutputDir::new(tmp.path().join("output"));
        let target = store.default_target();

        assert!(!store.exists(&target).await.unwrap());

        let records = vec![
            record(1.0, CurrencyCode::EUR, CurrencyCode::BGN, 1.95),
            record(2.5, CurrencyCode::USD, CurrencyCode::JPY, 391.12),
        ];
        store.write(&target, &records).await.unwrap();

        assert!(store.exists(&target).await.unwrap());
        let written = std::fs::read_to_string(&target).unwrap();
        let expected = r#"[
  {
    "date": "2024-06-08",
    "amount": 1.0,
    "base_currency": "EUR",
    "target_currency": "BGN",
    "converted_amount": 1.95
  },
  {
    "date": "2024-06-08",
    "amount": 2.5,
    "base_currency": "USD",
    "target_currency": "JPY",
    "converted_amount": 391.12
  }
]"#;
        assert_eq!(written, expected);
    }

    #[tokio::test]
    async fn test_write_empty_session() {
        let tmp = tempdir().unwrap();
        let store = JsonOutputDir::new(tmp.path());
        let target = store.default_target();

        store.write(&target, &[]).await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let tmp = tempdir().unwrap();
        let store = JsonOutputDir::new(tmp.path());
        let target = store.default_target();
        std::fs::write(&target, "stale").unwrap();

        store
            .write(&target, &[record(1.0, CurrencyCode::EUR, CurrencyCode::BGN, 1.95)])
            .await
            .unwrap();

        let parsed: Vec<ConversionRecord> =
            serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].target_currency, CurrencyCode::BGN);
    }
}
