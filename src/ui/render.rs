use ratatui::{
	Frame,
	layout::{Constraint, Layout, Margin, Rect},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, List, ListItem, ListState, Paragraph},
};

use super::PaletteHost;
use crate::palette::ExecOutcome;

impl PaletteHost {
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, results_area, status_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_input(frame, input_area);
		if self.palette.is_open() {
			self.render_results(frame, results_area);
		}
		self.render_status(frame, status_area);
	}

	fn render_input(&self, frame: &mut Frame, area: Rect) {
		let toggle = self.palette.config().toggle_key;
		let (title, body) = if self.palette.is_open() {
			(
				" Command palette ",
				Line::from(vec![
					Span::raw("> "),
					Span::raw(self.palette.input()),
					Span::styled(" ", Style::new().add_modifier(Modifier::REVERSED)),
				]),
			)
		} else {
			(
				" Closed ",
				Line::from(format!("Press '{toggle}' to open the palette, 'q' to quit")),
			)
		};
		let input = Paragraph::new(body).block(Block::bordered().title(title));
		frame.render_widget(input, area);
	}

	fn render_results(&self, frame: &mut Frame, area: Rect) {
		let items: Vec<ListItem> = self
			.palette
			.results()
			.map(|command| ListItem::new(Line::from(command.title.as_str())))
			.collect();
		let empty = items.is_empty();
		let list = List::new(items)
			.block(Block::bordered().title(" Results "))
			.highlight_style(Style::new().add_modifier(Modifier::REVERSED))
			.highlight_symbol("▶ ");
		let mut state = ListState::default().with_selected(self.selected_index());
		frame.render_stateful_widget(list, area, &mut state);

		if empty {
			let inner = area.inner(Margin {
				vertical: 1,
				horizontal: 2,
			});
			let hint = if self.palette.input().is_empty() {
				"Type to search commands"
			} else {
				"No results"
			};
			frame.render_widget(
				Paragraph::new(hint).style(Style::new().add_modifier(Modifier::DIM)),
				inner,
			);
		}
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![
			Span::styled(
				self.palette.state().to_string(),
				Style::new().add_modifier(Modifier::BOLD),
			),
			Span::raw(format!("  {} results", self.palette.result_ids().len())),
		];
		if let Some(last) = self.executions.last() {
			let outcome = match last.outcome {
				ExecOutcome::Executed => "ran",
				ExecOutcome::NotFound => "not found",
			};
			spans.push(Span::raw(format!("  last: {} ({outcome})", last.id)));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
