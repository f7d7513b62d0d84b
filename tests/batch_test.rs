use anyhow::Result;
use processing_formats::{check_document_str, BatchSummary, CheckConfig, FormatError};
use std::io::Write;
use tempfile::NamedTempFile;

/// 從設定檔指定的輸入檔讀取多筆 Site 並檢查
#[test]
fn test_check_file_named_by_config() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(
        br#"[
            {"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00",
             "Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},
            {"Station":"ANMO","Network":"IU","Latitude":34.9459,"Longitude":-106.4572},
            {"Station":"","Network":"IU","Latitude":-91,"Longitude":181,"Elevation":0}
        ]"#,
    )?;

    let mut config_file = NamedTempFile::new()?;
    let input_path = input.path().to_str().unwrap_or_default().replace('\\', "/");
    write!(
        config_file,
        "[input]\npath = \"{}\"\n\n[validation]\nfail_on_invalid = true\n",
        input_path
    )?;

    let config = CheckConfig::from_file(config_file.path())?;
    assert!(config.validation.fail_on_invalid);

    let text = std::fs::read_to_string(&config.input.path)?;
    let reports = check_document_str(&text)?;

    assert_eq!(
        BatchSummary::from_reports(&reports),
        BatchSummary { total: 3, valid: 1, invalid: 2 }
    );
    assert_eq!(reports[1].errors, vec!["No Elevation in Site Class."]);
    assert_eq!(
        reports[2].errors,
        vec![
            "Empty Station in Site Class.",
            "Latitude in Site Class not in the range of -90 to 90.",
            "Longitude in Site Class not in the range of -180 to 180.",
        ]
    );

    // 正規化輸出不含空字串欄位
    let normalized = reports[2].to_json(true);
    assert!(normalized["site"].get("Station").is_none());
    assert_eq!(normalized["site"]["Latitude"], serde_json::json!(-91.0));
    Ok(())
}

#[test]
fn test_malformed_document_is_parse_error() {
    let err = check_document_str("[{\"Station\":").unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
}
