use serde::Deserialize;
use tracing::info;

use crate::translate::{PipelineError, TranslationPipeline, TranslationResult};

/// Scripted classroom dialogue, one Chinese/Vietnamese pair per entry
const VALIDATION_CASES: &str = include_str!("../data/validation_cases.json");

#[derive(Debug, Clone, Deserialize)]
struct DialoguePair {
    chinese: String,
    vietnamese: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationCase {
    pub original_text: String,
    pub expected_translation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
}

impl ValidationSummary {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }
}

/// Every scripted pair, in both directions
pub fn load_cases() -> anyhow::Result<Vec<ValidationCase>> {
    let pairs: Vec<DialoguePair> = serde_json::from_str(VALIDATION_CASES)?;
    Ok(pairs
        .into_iter()
        .flat_map(|pair| {
            [
                ValidationCase {
                    original_text: pair.chinese.clone(),
                    expected_translation: pair.vietnamese.clone(),
                },
                ValidationCase {
                    original_text: pair.vietnamese,
                    expected_translation: pair.chinese,
                },
            ]
        })
        .collect())
}

/// Print the result of a single translation
pub fn print_result(result: &TranslationResult) {
    println!("原始文本: {}", result.original_text);
    println!("偵測語言: {}", result.original_lang);
    println!("翻譯結果: {}", result.translated_text);
    println!("執行時間: {:.4} 秒", result.execution_time);
}

/// Run every case through the pipeline and report exact-match results
pub async fn run_validation(
    pipeline: &TranslationPipeline,
    cases: &[ValidationCase],
) -> Result<ValidationSummary, PipelineError> {
    let mut summary = ValidationSummary {
        total: cases.len(),
        passed: 0,
    };
    info!("Running {} validation cases", summary.total);

    for (i, case) in cases.iter().enumerate() {
        println!("\n--- 測試案例 {}/{} ---", i + 1, summary.total);

        let result = pipeline.execute_translation_flow(&case.original_text).await?;
        let is_passed = result.translated_text == case.expected_translation;

        print_result(&result);
        println!("預期結果: {}", case.expected_translation);
        println!("結果: {}", if is_passed { "PASS" } else { "FAIL" });

        if is_passed {
            summary.passed += 1;
        }
    }

    println!("\n--- 測試總結 ---");
    println!("總測試數: {}", summary.total);
    println!("通過: {}", summary.passed);
    println!("失敗: {}", summary.failed());
    println!("{}", "-".repeat(50));

    Ok(summary)
}
