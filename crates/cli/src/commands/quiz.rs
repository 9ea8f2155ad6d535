//! `docset quiz <language> <category> <entry> [--answers ...]`

use docset::{DocEntry, grade};
use tracing::info;

use crate::cli::QuizArgs;
use crate::context::{CommandContext, require_category, require_entry, require_language};
use crate::error::Result;
use crate::output::{
	CommandInputs, OutputFormat, QuizData, QuizPrompt, ResultBuilder, print_result_with,
};
use crate::render;

pub fn execute(ctx: &CommandContext, args: QuizArgs, format: OutputFormat) -> Result<()> {
	let loaded = ctx.load()?;
	let language = require_language(&loaded.registry, &args.language)?;
	let category = require_category(language, &args.category)?;
	let entry = require_entry(language, category, &args.entry)?;

	let data = match &args.answers {
		Some(answers) => {
			let graded = grade(entry, answers)?;
			info!(
				target = "docset",
				entry = %entry.id,
				score = graded.score,
				total = graded.total,
				"graded quiz"
			);
			QuizData::Graded(graded)
		}
		None => questions(entry)?,
	};

	let result = ResultBuilder::new("quiz")
		.inputs(CommandInputs {
			language: Some(args.language),
			category: Some(args.category),
			entry: Some(args.entry),
			extra: args.answers.map(|a| serde_json::json!({ "answers": a })),
			..Default::default()
		})
		.data(data)
		.report_diagnostics(loaded.report.as_ref())
		.build();

	print_result_with(&result, format, render::quiz);
	Ok(())
}

/// The entry's questions with answers and explanations stripped.
fn questions(entry: &DocEntry) -> Result<QuizData> {
	let quiz = entry.quiz_questions();
	if quiz.is_empty() {
		return Err(docset::Error::NoQuiz {
			entry: entry.id.clone(),
		}
		.into());
	}
	Ok(QuizData::Questions {
		entry: entry.id.clone(),
		questions: quiz
			.iter()
			.map(|q| QuizPrompt {
				question: q.question.clone(),
				options: q.options.clone(),
			})
			.collect(),
	})
}
