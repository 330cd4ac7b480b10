//! Command implementations for the Monogatari CLI.

use std::fs;
use std::io::Read;
use std::sync::Arc;

use futures::StreamExt;
use futures::pin_mut;

use crate::analysis::analyzer::TextAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::MemoryDictionaryStore;
use crate::error::Result;
use crate::generator::{ScriptedTextSource, TextSource, story_prompt};
use crate::story::{StreamMessage, story_stream};
use crate::tokenizer::VibratoTokenizer;

/// Execute the given CLI command
pub fn execute_command(args: MonogatariArgs) -> Result<()> {
    match args.command.clone() {
        Command::Analyze(analyze_args) => execute_analyze(analyze_args, &args),
        Command::Story(story_args) => execute_story(story_args, &args),
        Command::Prompt(prompt_args) => execute_prompt(prompt_args, &args),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn build_analyzer(tokenizer_dict: &std::path::Path, dict: &std::path::Path) -> Result<TextAnalyzer> {
    let tokenizer = VibratoTokenizer::from_path(tokenizer_dict)?;
    let store = MemoryDictionaryStore::load_jsonl(dict)?;
    Ok(TextAnalyzer::new(Arc::new(tokenizer), Arc::new(store)))
}

/// Read an argument or fall back to stdin.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Execute the analyze command
fn execute_analyze(analyze_args: AnalyzeArgs, args: &MonogatariArgs) -> Result<()> {
    let analyzer = build_analyzer(&analyze_args.tokenizer_dict, &analyze_args.dict)?;
    let text = text_or_stdin(analyze_args.text)?;

    let analysis = runtime()?.block_on(analyzer.analyze(&text))?;
    print_json(&analysis, args.pretty)
}

/// Execute the story command
///
/// Prints the transport feed to stdout: one JSON chunk per completed
/// paragraph, then the terminal message.
fn execute_story(story_args: StoryArgs, args: &MonogatariArgs) -> Result<()> {
    let analyzer = build_analyzer(&story_args.tokenizer_dict, &story_args.dict)?;

    let story_text = match &story_args.story_file {
        Some(path) => fs::read_to_string(path)?,
        None => text_or_stdin(None)?,
    };
    let source = ScriptedTextSource::from_text(&story_text, story_args.chunk_size);

    runtime()?.block_on(async {
        let chunks = source.chunks();
        let stream = story_stream(&analyzer, chunks);
        pin_mut!(stream);

        while let Some(item) = stream.next().await {
            match item {
                Ok(chunk) => print_json(&StreamMessage::Chunk(chunk), args.pretty)?,
                Err(e) => {
                    print_json(&StreamMessage::error(e.to_string()), args.pretty)?;
                    return Err(e);
                }
            }
        }

        print_json(&StreamMessage::done(), args.pretty)
    })
}

/// Execute the prompt command
fn execute_prompt(prompt_args: PromptArgs, _args: &MonogatariArgs) -> Result<()> {
    println!("{}", story_prompt(&prompt_args.request));
    Ok(())
}
