// ============================================
// src/ui.rs
// UI描画
// ============================================

use std::time::Instant;

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::app::{AppState, Focus};
use crate::grammar::{Gender, Person, Verb};
use crate::panel::{FLASHCARD_COLUMNS, Flashcards, Panel, QuizPanel, TemplateForm};
use crate::quiz::QuizKind;
use crate::topics::Topic;
use crate::vocab::{
    ARTICLE_RULES, DEMONSTRATIVE_RULES, FLASHCARDS, GENDER_RULES, GREETINGS, NATIONALITIES,
    POR_PARA_RULES, POSSESSIVE_RULES, Phrase, QUESTION_WORDS, Rule, TIME_RULES,
};

const ACCENT: Color = Color::Red;

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// 見出し ("12. La Hora (The Time)")
fn heading(topic: Topic) -> String {
    match topic {
        Topic::Welcome => "Bienvenido a tu Guía Interactiva".to_string(),
        t => format!("{}. {} ({})", t.index(), t.title(), t.subtitle()),
    }
}

pub fn ui(f: &mut Frame, app: &AppState) {
    let size = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(rows[0]);

    draw_sidebar(f, app, columns[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus == Focus::Panel))
        .title(heading(app.topic));
    let inner = block.inner(columns[1]);
    f.render_widget(block, columns[1]);

    match &app.panel {
        Panel::Static(topic) => draw_static(f, *topic, inner),
        Panel::Quiz(quiz) => draw_quiz(f, quiz, inner),
        Panel::Flashcards(cards) => draw_flashcards(f, cards, inner),
        Panel::Verbs(verb) => draw_verbs(f, *verb, inner),
        Panel::Form(form) => draw_form(f, form, inner),
    }

    let help = match (app.focus, &app.panel) {
        (Focus::Sidebar, _) => "↑/↓: elegir  Enter: abrir  Tab: panel  q/Esc: salir",
        (Focus::Panel, Panel::Form(_)) => "Tab/Shift-Tab: campo  ←: menú  Esc: salir",
        (Focus::Panel, _) => "Tab: menú  Enter: revisar  ←/→: opción  Esc: salir",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = Topic::ALL
        .iter()
        .map(|&t| {
            let marker = if t == app.topic { "▶ " } else { "  " };
            let mut style = Style::default();
            if t == app.topic {
                style = style.fg(Color::White).bg(ACCENT);
            }
            if t == app.highlighted && app.focus == Focus::Sidebar {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(t.title()).bold(),
                Span::raw(" "),
                Span::raw(t.subtitle()).fg(Color::Gray),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Guía de Examen")
            .borders(Borders::ALL)
            .border_style(focus_style(app.focus == Focus::Sidebar)),
    );
    f.render_widget(list, area);
}

fn phrase_table(rows: &[Phrase]) -> Table<'static> {
    let rows: Vec<Row> = rows
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.spanish).style(Style::default().bold()),
                Cell::from(p.english),
            ])
        })
        .collect();
    Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(Row::new(vec!["Español", "Inglés"]).style(Style::default().fg(Color::Cyan)))
}

fn rule_lines(rules: &[Rule]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, body) in rules {
        lines.push(Line::from(*title).style(Style::default().fg(ACCENT).bold()));
        for text in body.iter() {
            lines.push(Line::from(format!("  • {}", text)));
        }
    }
    lines
}

fn draw_static(f: &mut Frame, topic: Topic, area: Rect) {
    match topic {
        Topic::Greetings => {
            f.render_widget(phrase_table(GREETINGS), area);
        }
        Topic::Questions => {
            f.render_widget(phrase_table(QUESTION_WORDS), area);
        }
        Topic::Nationalities => {
            let rows: Vec<Row> = NATIONALITIES
                .iter()
                .map(|n| {
                    Row::new(vec![
                        n.country,
                        n.form(Gender::Masculine),
                        n.form(Gender::Feminine),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(40),
                    Constraint::Percentage(30),
                    Constraint::Percentage(30),
                ],
            )
            .header(
                Row::new(vec!["País (Country)", "Masculino", "Femenino"])
                    .style(Style::default().fg(Color::Cyan)),
            );
            f.render_widget(table, area);
        }
        _ => {
            let lines = vec![
                Line::from("This application is designed to help you prepare for your Spanish exam."),
                Line::from("Use the menu on the left to navigate between topics."),
                Line::from(""),
                Line::from("¿Cómo usar esta guía? (How to use this guide?)").bold(),
                Line::from("  1. Selecciona un tema del menú de navegación."),
                Line::from("  2. Lee las explicaciones y los ejemplos."),
                Line::from("  3. Prueba los ejercicios interactivos para poner a prueba tus conocimientos."),
                Line::from("  4. Revisa los temas tantas veces como necesites."),
                Line::from(""),
                Line::from("Enter: Start Preparing").fg(ACCENT),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        }
    }
}

fn quiz_rules(kind: QuizKind) -> &'static [Rule] {
    match kind {
        QuizKind::Gender => GENDER_RULES,
        QuizKind::Demonstratives => DEMONSTRATIVE_RULES,
        QuizKind::Time => TIME_RULES,
        QuizKind::Articles => ARTICLE_RULES,
        QuizKind::Possessives => POSSESSIVE_RULES,
        QuizKind::PorPara => POR_PARA_RULES,
        QuizKind::Numbers => &[],
    }
}

fn draw_quiz(f: &mut Frame, quiz: &QuizPanel, area: Rect) {
    let rules = rule_lines(quiz_rules(quiz.kind));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),     // [0] 規則
            Constraint::Length(12), // [1] クイズ
            Constraint::Length(1),  // [2] 正答率ゲージ
        ])
        .split(area);

    f.render_widget(Paragraph::new(rules).wrap(Wrap { trim: false }), chunks[0]);

    let q = &quiz.question;
    let mut lines = vec![
        Line::from(quiz.kind.title()).bold(),
        Line::from(quiz.kind.instruction()).fg(Color::Gray),
        Line::from(""),
        Line::from(q.prompt.as_str())
            .style(Style::default().fg(ACCENT).bold())
            .centered(),
        Line::from(""),
    ];

    if q.is_text() {
        let cursor = if quiz.is_locked() { "" } else { "_" };
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(format!("{}{}", quiz.input, cursor), Style::default().fg(Color::Green)),
        ]));
    } else {
        for (gi, group) in q.groups().iter().enumerate() {
            let mut spans = Vec::new();
            if let Some(label) = group.label {
                spans.push(Span::raw(format!("{:<22}", label)));
            }
            for (oi, option) in group.options.iter().enumerate() {
                let style = if quiz.cursor == (gi, oi) {
                    Style::default().fg(Color::Black).bg(Color::White)
                } else {
                    Style::default().fg(Color::White).bg(Color::DarkGray)
                };
                spans.push(Span::styled(format!(" {} {} ", oi + 1, option), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans).centered());
        }
    }

    lines.push(Line::from(""));
    if let Some(fb) = &quiz.feedback {
        let color = if fb.correct { Color::Green } else { Color::Red };
        lines.push(Line::from(fb.message.as_str()).fg(color).centered());
    }
    if let Some(pending) = quiz.pending() {
        let left = pending.due().saturating_duration_since(Instant::now());
        lines.push(
            Line::from(format!("Siguiente pregunta en {:.1}s", left.as_secs_f64()))
                .fg(Color::DarkGray)
                .centered(),
        );
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        chunks[1],
    );

    // 正答率 (セッション中のみ)
    let score = quiz.score;
    let ratio = if score.attempts > 0 {
        score.correct as f64 / score.attempts as f64
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(ratio)
        .label(format!("Aciertos: {} / {}", score.correct, score.attempts));
    f.render_widget(gauge, chunks[2]);
}

fn draw_flashcards(f: &mut Frame, cards: &Flashcards, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(
            "Learn vocabulary for time. Space flips a card. Days and months are not capitalized.",
        )
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let rows: Vec<Row> = FLASHCARDS
        .chunks(FLASHCARD_COLUMNS)
        .enumerate()
        .map(|(r, row)| {
            let cells: Vec<Cell> = row
                .iter()
                .enumerate()
                .map(|(c, card)| {
                    let index = r * FLASHCARD_COLUMNS + c;
                    let flipped = cards.is_flipped(index);
                    let text = if flipped { card.back } else { card.front };
                    let mut style = if flipped {
                        Style::default().fg(Color::Black).bg(Color::LightRed)
                    } else {
                        Style::default()
                    };
                    if index == cards.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(text).style(style)
                })
                .collect();
            Row::new(cells).height(2)
        })
        .collect();

    let widths = [Constraint::Percentage(25); FLASHCARD_COLUMNS];
    f.render_widget(Table::new(rows, widths).column_spacing(1), chunks[1]);
}

fn draw_verbs(f: &mut Frame, verb: Verb, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let selector = Line::from(vec![
        Span::raw("Selecciona un verbo: (Select a verb:)  "),
        Span::raw("◀ "),
        Span::styled(verb.label(), Style::default().fg(ACCENT).bold()),
        Span::raw(" ▶"),
    ]);
    f.render_widget(Paragraph::new(selector), chunks[0]);

    let rows: Vec<Row> = Person::ALL
        .iter()
        .map(|&p| {
            Row::new(vec![
                Cell::from(p.pronoun()),
                Cell::from(verb.conjugate(p)).style(Style::default().bold()),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(
            Row::new(vec!["Pronombre (Pronoun)", "Conjugación (Conjugation)"])
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(table, chunks[1]);
}

fn draw_form(f: &mut Frame, form: &TemplateForm, area: Rect) {
    let fields = &form.template.fields;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(fields.len() as u16 + 2), Constraint::Min(0)])
        .split(area);

    let field_lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == form.focus;
            let value = if focused {
                format!("{}_", field.value)
            } else {
                field.value.clone()
            };
            let label_style = if focused {
                Style::default().fg(ACCENT).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::styled(value, Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(field_lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title("Tus Detalles (Your Details)"),
        ),
        chunks[0],
    );

    let text: Vec<Line> = form
        .template
        .lines()
        .into_iter()
        .map(|(es, en)| {
            Line::from(vec![
                Span::raw(es).bold(),
                Span::raw(" "),
                Span::raw(en).fg(Color::Gray),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;

    fn render(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn every_topic_renders() {
        for topic in Topic::ALL {
            let app = AppState::new(topic, StdRng::seed_from_u64(1), 1.0);
            let screen = render(&app);
            assert!(screen.contains("Guía de Examen"), "{topic}");
            assert!(screen.contains(topic.subtitle()), "{topic}");
        }
    }

    #[test]
    fn time_quiz_shows_the_clock() {
        let app = AppState::new(Topic::Time, StdRng::seed_from_u64(3), 1.0);
        let Panel::Quiz(quiz) = &app.panel else { panic!("time is a quiz") };
        let prompt = quiz.question.prompt.clone();
        assert!(render(&app).contains(&prompt));
    }

    #[test]
    fn verb_table_shows_conjugations() {
        let app = AppState::new(Topic::Verbs, StdRng::seed_from_u64(3), 1.0);
        let screen = render(&app);
        assert!(screen.contains("somos"));
        assert!(screen.contains("Conjugación"));
    }

    #[test]
    fn nationalities_show_both_forms() {
        let app = AppState::new(Topic::Nationalities, StdRng::seed_from_u64(3), 1.0);
        let screen = render(&app);
        assert!(screen.contains("afgano"));
        assert!(screen.contains("afgana"));
    }

    #[test]
    fn form_help_names_the_field_keys() {
        let mut app = AppState::new(Topic::Introduce, StdRng::seed_from_u64(3), 1.0);
        app.focus = Focus::Panel;
        assert!(render(&app).contains("Shift-Tab"));
    }
}
