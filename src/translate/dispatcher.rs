use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::interface::Translate;
use super::language::Language;
use super::pipeline::PipelineError;
use super::segmenter::TextChunk;

/// Translate every chunk concurrently and return the results in chunk order.
///
/// One task is spawned per chunk, tagged with the chunk's index. A chunk whose
/// translation fails keeps its original text, so the output always has one
/// entry per input chunk. Only a failure of the task itself (panic or
/// cancellation) is returned as an error.
pub async fn translate_all(
    translator: Arc<dyn Translate>,
    chunks: &[TextChunk],
    source_lang: Language,
    dest_lang: Language,
) -> Result<Vec<String>, PipelineError> {
    debug!(
        "Dispatching {} chunk(s) {} -> {}",
        chunks.len(),
        source_lang,
        dest_lang
    );

    let mut tasks = JoinSet::new();
    for chunk in chunks {
        let translator = Arc::clone(&translator);
        let index = chunk.index;
        let text = chunk.text.clone();
        tasks.spawn(async move {
            let translated = match translator
                .translate(&text, source_lang.code(), dest_lang.code())
                .await
            {
                Ok(translated) => translated,
                Err(e) => {
                    let preview: String = text.chars().take(20).collect();
                    warn!("Translation error '{}...': {}", preview, e);
                    text
                }
            };
            (index, translated)
        });
    }

    let mut translated_parts = Vec::with_capacity(chunks.len());
    while let Some(joined) = tasks.join_next().await {
        translated_parts.push(joined?);
    }
    translated_parts.sort_by_key(|(index, _)| *index);

    Ok(translated_parts.into_iter().map(|(_, translated)| translated).collect())
}
