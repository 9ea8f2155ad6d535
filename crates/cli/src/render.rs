//! Human-readable views for `--format text`.

use std::fmt::Write;

use colored::Colorize;
use docset::{Difficulty, DocEntry, DocSection};

use crate::output::{
	ConfigData, EntrySummary, ExportData, LanguagesData, QuizData, SearchData, ShowData, StatsData,
	ValidateData,
};

fn difficulty(d: Difficulty) -> colored::ColoredString {
	match d {
		Difficulty::Beginner => d.as_str().green(),
		Difficulty::Intermediate => d.as_str().yellow(),
		Difficulty::Advanced => d.as_str().red(),
	}
}

fn entry_line(out: &mut String, entry: &EntrySummary) {
	let mut extras = Vec::new();
	if entry.has_quiz {
		extras.push("quiz");
	}
	if entry.has_challenge {
		extras.push("challenge");
	}
	let _ = write!(
		out,
		"  {:<24} {} [{}]",
		entry.id.cyan(),
		entry.title,
		difficulty(entry.difficulty)
	);
	if !extras.is_empty() {
		let _ = write!(out, " ({})", extras.join(", ").dimmed());
	}
	out.push('\n');
}

pub fn languages(data: &LanguagesData) -> String {
	let mut out = String::new();
	for lang in &data.languages {
		let _ = writeln!(
			out,
			"{:<12} {}  {}",
			lang.id.cyan().bold(),
			lang.label.bold(),
			lang.tagline.dimmed()
		);
		let _ = writeln!(
			out,
			"{:<12} {} categories, {} entries, {}",
			"",
			lang.categories,
			lang.entries,
			lang.docs_url
		);
	}
	out
}

pub fn show(data: &ShowData) -> String {
	let mut out = String::new();
	match data {
		ShowData::Language {
			language,
			categories,
		} => {
			let _ = writeln!(out, "{} ({})", language.label.bold(), language.id.cyan());
			let _ = writeln!(out, "{}", language.tagline);
			let _ = writeln!(out, "docs: {}  runs as: {}", language.docs_url, language.execution_api_id);
			out.push('\n');
			for category in categories {
				let _ = writeln!(
					out,
					"  {:<20} {} ({} entries)",
					category.id.cyan(),
					category.label,
					category.entries
				);
			}
		}
		ShowData::Category {
			language,
			id,
			label,
			entries,
		} => {
			let _ = writeln!(out, "{} {}", label.bold(), format!("{language}/{id}").dimmed());
			for entry in entries {
				entry_line(&mut out, entry);
			}
		}
		ShowData::Entry {
			language,
			category,
			entry,
		} => render_entry(&mut out, language, category, entry),
	}
	out
}

fn render_entry(out: &mut String, language: &str, category: &str, entry: &DocEntry) {
	let _ = writeln!(
		out,
		"{} [{}] {}",
		entry.title.bold(),
		difficulty(entry.difficulty),
		format!("{language}/{category}/{}", entry.id).dimmed()
	);
	if !entry.tags.is_empty() {
		let _ = writeln!(out, "tags: {}", entry.tags.join(", "));
	}

	for section in &entry.sections {
		out.push('\n');
		render_section(out, section);
	}

	let questions = entry.quiz_questions().len();
	if questions > 0 {
		let _ = writeln!(
			out,
			"\n{} {questions} question(s): docset quiz {language} {category} {}",
			"Quiz:".bold(),
			entry.id
		);
	}
	if let Some(challenge) = &entry.challenge {
		let _ = writeln!(out, "\n{} {}", "Challenge:".bold(), challenge.prompt);
		let _ = writeln!(out, "{}", indent(&challenge.starter_code));
		let _ = writeln!(out, "{} hint(s) available", challenge.hints.len());
	}
}

fn render_section(out: &mut String, section: &DocSection) {
	let _ = writeln!(out, "{}", format!("## {}", section.heading).bold());
	let _ = writeln!(out, "{}", section.content);
	if let Some(code) = &section.code {
		let _ = writeln!(out, "{}", indent(code).cyan());
	}
	if let Some(output) = &section.output {
		let _ = writeln!(out, "{}", indent(output).dimmed());
	}
	let callouts = [
		("tip", section.tip.as_deref(), "green"),
		("note", section.note.as_deref(), "blue"),
		("warning", section.warning.as_deref(), "yellow"),
		("analogy", section.analogy.as_deref(), "magenta"),
	];
	for (label, text, color) in callouts {
		if let Some(text) = text {
			let _ = writeln!(out, "{} {text}", format!("{label}:").color(color).bold());
		}
	}
}

fn indent(text: &str) -> String {
	text.lines()
		.map(|line| format!("    {line}"))
		.collect::<Vec<_>>()
		.join("\n")
}

pub fn search(data: &SearchData) -> String {
	let mut out = String::new();
	if data.results.is_empty() {
		out.push_str("no matching entries\n");
		return out;
	}
	let mut current: Option<(&str, &str)> = None;
	for row in &data.results {
		let key = (row.language.as_str(), row.category.as_str());
		if current != Some(key) {
			let _ = writeln!(out, "{}", format!("{}/{}", row.language, row.category).bold());
			current = Some(key);
		}
		entry_line(&mut out, &row.entry);
	}
	let _ = writeln!(out, "{} result(s)", data.count);
	out
}

pub fn validate(data: &ValidateData) -> String {
	let mut out = String::new();
	for violation in &data.report.violations {
		let line = violation.to_string();
		let _ = writeln!(
			out,
			"{}",
			if violation.is_error() { line.red() } else { line.yellow() }
		);
	}
	let summary = format!(
		"{} language(s): {} error(s), {} warning(s)",
		data.languages, data.errors, data.warnings
	);
	let _ = writeln!(
		out,
		"{}",
		if data.valid { summary.green().bold() } else { summary.red().bold() }
	);
	out
}

pub fn export(data: &ExportData) -> String {
	match (&data.path, &data.config) {
		(Some(path), _) => format!(
			"exported {} ({} categories) to {}\n",
			data.language.cyan(),
			data.categories,
			path.display()
		),
		(None, Some(config)) => serde_json::to_string_pretty(config).unwrap_or_default(),
		(None, None) => String::new(),
	}
}

pub fn stats(data: &StatsData) -> String {
	let mut out = String::new();
	let _ = writeln!(
		out,
		"{:<12} {:>10} {:>8} {:>9} {:>8} {:>11}",
		"language".bold(),
		"categories".bold(),
		"entries".bold(),
		"sections".bold(),
		"quizzes".bold(),
		"challenges".bold()
	);
	for lang in &data.languages {
		let _ = writeln!(
			out,
			"{:<12} {:>10} {:>8} {:>9} {:>8} {:>11}",
			lang.id.cyan(),
			lang.categories,
			lang.entries,
			lang.sections,
			lang.quiz_questions,
			lang.challenges
		);
		let spread = lang
			.by_difficulty
			.iter()
			.map(|(d, n)| format!("{d} {n}"))
			.collect::<Vec<_>>()
			.join(", ");
		let _ = writeln!(out, "{:<12} {}", "", spread.dimmed());
	}
	out
}

pub fn quiz(data: &QuizData) -> String {
	let mut out = String::new();
	match data {
		QuizData::Questions { entry, questions } => {
			let _ = writeln!(out, "{}", format!("Quiz: {entry}").bold());
			for (n, q) in questions.iter().enumerate() {
				let _ = writeln!(out, "\n{}. {}", n + 1, q.question);
				for (i, option) in q.options.iter().enumerate() {
					let _ = writeln!(out, "   [{i}] {option}");
				}
			}
			let _ = writeln!(out, "\nanswer with --answers {}", vec!["N"; questions.len()].join(","));
		}
		QuizData::Graded(grade) => {
			for (n, result) in grade.results.iter().enumerate() {
				let mark = if result.correct { "correct".green() } else { "wrong".red() };
				let _ = writeln!(out, "{}. {} [{mark}]", n + 1, result.question);
				if !result.correct {
					let _ = writeln!(out, "   answer: [{}]", result.correct_index);
				}
				let _ = writeln!(out, "   {}", result.explanation.dimmed());
			}
			let score = format!("{}/{}", grade.score, grade.total);
			let _ = writeln!(
				out,
				"score: {}",
				if grade.passed_all() { score.green().bold() } else { score.yellow().bold() }
			);
		}
	}
	out
}

pub fn config(data: &ConfigData) -> String {
	let mut out = String::new();
	let effective = &data.effective;
	let content = match &effective.content_dir {
		Some(dir) => dir.display().to_string(),
		None => docset::BUILTIN_ROOT.to_string(),
	};
	let _ = writeln!(out, "content:          {content} ({:?})", effective.content_origin);
	let _ = writeln!(out, "validation:       {}", effective.validation);
	let _ = writeln!(
		out,
		"default language: {}",
		data.default_language.as_deref().unwrap_or("-")
	);
	let _ = writeln!(out, "global config:    {}", data.global_config.display());
	if let Some(project) = &data.project_config {
		let _ = writeln!(out, "project config:   {}", project.display());
	}
	for path in &data.loaded_from {
		let _ = writeln!(out, "loaded:           {}", path.display());
	}
	out
}
