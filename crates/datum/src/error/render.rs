// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render(&mut output, diagnostic, 0);
		output
	}

	fn render(output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{}  = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "\n{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "\n{}caused by:", indent);
			Self::render(output, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_cause() {
		let diagnostic = Diagnostic {
			code: "OUTER_001".to_string(),
			message: "outer".to_string(),
			label: Some("label".to_string()),
			help: Some("help text".to_string()),
			notes: vec!["SQLSTATE 22001".to_string()],
			cause: Some(Box::new(Diagnostic {
				code: "INNER_001".to_string(),
				message: "inner".to_string(),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			})),
		};

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("error[OUTER_001]: outer\n"));
		assert!(out.contains("help: help text"));
		assert!(out.contains("note: SQLSTATE 22001"));
		assert!(out.contains("  error[INNER_001]: inner"));
		assert_eq!(diagnostic.sql_state(), Some("22001"));
	}
}
