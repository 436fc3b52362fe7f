use crate::domain::model::{OutputFormat, TallyReport};
use crate::utils::error::{Result, TallyError};

pub fn render(report: &TallyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

/// 四行輸出：母音、子音、大寫、小寫
pub fn render_text(report: &TallyReport) -> String {
    let counts = &report.counts;
    format!(
        "vowels: {}\nconsonant: {}\nuppercase: {}\nlowercase: {}\n",
        counts.vowels, counts.consonants, counts.uppercase, counts.lowercase
    )
}

pub fn render_json(report: &TallyReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(report: &TallyReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "file",
        "characters",
        "vowels",
        "consonants",
        "uppercase",
        "lowercase",
    ])?;
    writer.write_record([
        report.file.clone(),
        report.characters.to_string(),
        report.counts.vowels.to_string(),
        report.counts.consonants.to_string(),
        report.counts.uppercase.to_string(),
        report.counts.lowercase.to_string(),
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(e.error().kind(), e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| TallyError::EncodingError {
        path: report.file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LetterCounts;

    fn sample_report() -> TallyReport {
        TallyReport::new("sample.txt", 11, LetterCounts::new(3, 7, 2, 8))
    }

    #[test]
    fn test_text_report_order_and_labels() {
        let text = render(&sample_report(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["vowels: 3", "consonant: 7", "uppercase: 2", "lowercase: 8"]
        );
    }

    #[test]
    fn test_json_report_contains_counts() {
        let json = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "sample.txt");
        assert_eq!(value["characters"], 11);
        assert_eq!(value["vowels"], 3);
        assert_eq!(value["consonants"], 7);
        assert_eq!(value["uppercase"], 2);
        assert_eq!(value["lowercase"], 8);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_report_has_header_and_row() {
        let csv = render(&sample_report(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("file,characters,vowels,consonants,uppercase,lowercase")
        );
        assert_eq!(lines.next(), Some("sample.txt,11,3,7,2,8"));
        assert_eq!(lines.next(), None);
    }
}
