//! Learning view: weekly study-hours chart above per-topic progress
//! gauges and skill lists.

use folio_core::{LearningTopic, StudySample};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Widget},
};

use super::progress_color;
use crate::presentation::formatters::truncate_text;

/// Rows given to the study-hours chart
const CHART_HEIGHT: u16 = 10;
/// Rows per topic card: gauge plus up to three skill lines
const TOPIC_CARD_HEIGHT: u16 = 5;

pub struct LearningView<'a> {
    topics: &'a [LearningTopic],
    study_hours: &'a [StudySample],
}

impl<'a> LearningView<'a> {
    pub fn new(topics: &'a [LearningTopic], study_hours: &'a [StudySample]) -> Self {
        Self {
            topics,
            study_hours,
        }
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let points: Vec<(f64, f64)> = self
            .study_hours
            .iter()
            .enumerate()
            .map(|(i, sample)| (i as f64, f64::from(sample.hours)))
            .collect();

        let max_hours = self
            .study_hours
            .iter()
            .map(|s| s.hours)
            .max()
            .unwrap_or(0);

        let datasets = vec![
            Dataset::default()
                .name("hours")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&points),
        ];

        let x_labels: Vec<String> = match (self.study_hours.first(), self.study_hours.last()) {
            (Some(first), Some(last)) if self.study_hours.len() > 1 => {
                vec![first.label.clone(), last.label.clone()]
            }
            (Some(only), _) => vec![only.label.clone()],
            _ => Vec::new(),
        };

        let x_max = (self.study_hours.len().saturating_sub(1)).max(1) as f64;
        let y_max = f64::from(max_hours.max(1)) * 1.2;

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title("Weekly Study Hours")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, y_max])
                    .labels(vec!["0".to_string(), format!("{}", max_hours)]),
            );

        chart.render(area, buf);
    }

    fn render_topic(topic: &LearningTopic, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        // Gauge percent is already validated to 0..=100 at catalog load
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(progress_color(topic.progress))
                    .add_modifier(Modifier::BOLD),
            )
            .percent(u16::from(topic.progress))
            .label(format!("{} {}%", topic.topic, topic.progress))
            .render(rows[0], buf);

        let skills: Vec<Line> = topic
            .skills
            .iter()
            .take(3)
            .map(|skill| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Blue)),
                    Span::raw(truncate_text(skill, 70)),
                ])
            })
            .collect();

        Paragraph::new(skills).render(rows[1], buf);
    }
}

impl Widget for LearningView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Learning Progress")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::vertical([Constraint::Length(CHART_HEIGHT), Constraint::Min(0)]).split(inner);

        self.render_chart(chunks[0], buf);

        let mut constraints: Vec<Constraint> = self
            .topics
            .iter()
            .map(|_| Constraint::Length(TOPIC_CARD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        let cards = Layout::vertical(constraints).split(chunks[1]);

        for (topic, card) in self.topics.iter().zip(cards.iter()) {
            Self::render_topic(topic, *card, buf);
        }
    }
}
