// ============================================
// src/app.rs
// アプリ全体の状態とキー入力の処理
// ============================================

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

use crate::panel::{FLASHCARD_COLUMNS, Panel};
use crate::quiz::Answer;
use crate::topics::Topic;

/// どこにキー入力が行くか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Panel,
}

/// アプリ全体の状態を管理する
pub struct AppState {
    pub topic: Topic,
    /// サイドバーでハイライト中のトピック (Enter で開く)
    pub highlighted: Topic,
    pub focus: Focus,
    pub panel: Panel,
    pub should_quit: bool,
    delay_scale: f64,
    rng: StdRng,
}

impl AppState {
    pub fn new(start: Topic, rng: StdRng, delay_scale: f64) -> Self {
        let mut state = Self {
            topic: start,
            highlighted: start,
            focus: Focus::Sidebar,
            panel: Panel::Static(start),
            should_quit: false,
            delay_scale,
            rng,
        };
        state.panel = Panel::open(start, &mut state.rng, delay_scale);
        state
    }

    /// MARK:トピックを切り替える
    ///
    /// 古いパネルの予約は取り消し、新しいパネルは作り直す
    pub fn navigate(&mut self, topic: Topic) {
        self.panel.teardown();
        log::info!("navigate {} -> {}", self.topic, topic);
        self.topic = topic;
        self.highlighted = topic;
        self.panel = Panel::open(topic, &mut self.rng, self.delay_scale);
    }

    /// 予約の期限を確認する (メインループから毎回呼ぶ)
    pub fn tick(&mut self, now: Instant) {
        self.panel.tick(now, &mut self.rng);
    }

    /// キー入力の処理
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }
        // フォームでは Tab / Shift-Tab で入力欄を移動する
        if self.focus == Focus::Panel {
            if let Panel::Form(form) = &mut self.panel {
                let delta = match key.code {
                    KeyCode::Tab => 1,
                    KeyCode::BackTab => -1,
                    _ => 0,
                };
                if delta != 0 {
                    form.move_focus(delta);
                    return;
                }
            }
        }
        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.focus = match self.focus {
                Focus::Sidebar => Focus::Panel,
                Focus::Panel => Focus::Sidebar,
            };
            return;
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar(key.code),
            Focus::Panel => self.handle_panel(key.code, now),
        }
    }

    fn handle_sidebar(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.highlighted = self.highlighted.next(),
            KeyCode::Up | KeyCode::Char('k') => self.highlighted = self.highlighted.prev(),
            KeyCode::Enter | KeyCode::Right => {
                if self.highlighted != self.topic {
                    self.navigate(self.highlighted);
                }
                self.focus = Focus::Panel;
            }
            _ => {}
        }
    }

    fn handle_panel(&mut self, code: KeyCode, now: Instant) {
        // ようこそ画面: Enter で最初のトピックへ
        if matches!(self.panel, Panel::Static(Topic::Welcome)) {
            if code == KeyCode::Enter {
                self.navigate(Topic::Greetings);
            }
            return;
        }

        match &mut self.panel {
            Panel::Static(_) => {}
            Panel::Quiz(quiz) => {
                if quiz.question.is_text() {
                    match code {
                        KeyCode::Char(c) => quiz.push_char(c),
                        KeyCode::Backspace => quiz.pop_char(),
                        KeyCode::Enter => {
                            quiz.submit_current(now);
                        }
                        _ => {}
                    }
                } else {
                    match code {
                        KeyCode::Left | KeyCode::Char('h') => quiz.move_option(-1),
                        KeyCode::Right | KeyCode::Char('l') => quiz.move_option(1),
                        KeyCode::Up | KeyCode::Char('k') => quiz.move_group(-1),
                        KeyCode::Down | KeyCode::Char('j') => quiz.move_group(1),
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            quiz.submit_current(now);
                        }
                        // 数字キーで直接選ぶ
                        KeyCode::Char(c @ '1'..='9') => {
                            let option = c as usize - '1' as usize;
                            quiz.submit(
                                Answer::Choice {
                                    group: quiz.cursor.0,
                                    option,
                                },
                                now,
                            );
                        }
                        _ => {}
                    }
                }
            }
            Panel::Flashcards(cards) => match code {
                KeyCode::Left | KeyCode::Char('h') => cards.move_by(-1),
                KeyCode::Right | KeyCode::Char('l') => cards.move_by(1),
                KeyCode::Up | KeyCode::Char('k') => cards.move_by(-(FLASHCARD_COLUMNS as isize)),
                KeyCode::Down | KeyCode::Char('j') => cards.move_by(FLASHCARD_COLUMNS as isize),
                KeyCode::Enter | KeyCode::Char(' ') => cards.toggle(),
                _ => {}
            },
            Panel::Verbs(verb) => match code {
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                    *verb = verb.prev()
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                    *verb = verb.next()
                }
                _ => {}
            },
            Panel::Form(form) => match code {
                KeyCode::Left => self.focus = Focus::Sidebar,
                KeyCode::Up => form.move_focus(-1),
                KeyCode::Down | KeyCode::Enter => form.move_focus(1),
                KeyCode::Char(c) => form.push_char(c),
                KeyCode::Backspace => form.pop_char(),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Verb;
    use rand::SeedableRng;
    use std::time::Duration;

    fn app(start: Topic) -> AppState {
        AppState::new(start, StdRng::seed_from_u64(21), 1.0)
    }

    fn press(app: &mut AppState, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    #[test]
    fn sidebar_navigation_opens_topics() {
        let mut a = app(Topic::Welcome);
        let now = Instant::now();
        press(&mut a, KeyCode::Down, now);
        press(&mut a, KeyCode::Down, now);
        assert_eq!(a.topic, Topic::Welcome);
        press(&mut a, KeyCode::Enter, now);
        assert_eq!(a.topic, Topic::Numbers);
        assert_eq!(a.focus, Focus::Panel);
        assert!(matches!(a.panel, Panel::Quiz(_)));
    }

    #[test]
    fn welcome_enter_goes_to_greetings() {
        let mut a = app(Topic::Welcome);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        press(&mut a, KeyCode::Enter, now);
        assert_eq!(a.topic, Topic::Greetings);
    }

    #[test]
    fn navigating_away_cancels_the_pending_advance() {
        let mut a = app(Topic::Time);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        press(&mut a, KeyCode::Char('x'), now);
        press(&mut a, KeyCode::Enter, now);
        let Panel::Quiz(quiz) = &a.panel else { panic!("time is a quiz") };
        assert!(quiz.pending().is_some());

        a.navigate(Topic::Gender);
        a.tick(now + Duration::from_secs(10));
        let Panel::Quiz(quiz) = &a.panel else { panic!("gender is a quiz") };
        assert!(quiz.pending().is_none());
        assert!(quiz.feedback.is_none());
    }

    #[test]
    fn text_quiz_round_trip_through_keys() {
        let mut a = app(Topic::Numbers);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        let answer = match &a.panel {
            Panel::Quiz(q) => match &q.question.expect {
                crate::quiz::Expect::Text { answer, .. } => answer.clone(),
                _ => panic!("numbers quiz is free text"),
            },
            _ => panic!("numbers is a quiz"),
        };
        for c in answer.chars() {
            press(&mut a, KeyCode::Char(c), now);
        }
        press(&mut a, KeyCode::Enter, now);
        let Panel::Quiz(q) = &a.panel else { unreachable!() };
        assert!(q.feedback.as_ref().unwrap().correct);

        a.tick(now + Duration::from_millis(2000));
        let Panel::Quiz(q) = &a.panel else { unreachable!() };
        assert!(q.feedback.is_none());
        assert_eq!(q.score.correct, 1);
    }

    #[test]
    fn number_keys_answer_choice_quizzes() {
        let mut a = app(Topic::PorPara);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        press(&mut a, KeyCode::Char('2'), now);
        let Panel::Quiz(q) = &a.panel else { unreachable!() };
        assert_eq!(q.score.attempts, 1);
        // 範囲外の数字は無視される
        let mut b = app(Topic::Gender);
        press(&mut b, KeyCode::Tab, now);
        press(&mut b, KeyCode::Char('9'), now);
        let Panel::Quiz(q) = &b.panel else { unreachable!() };
        assert_eq!(q.score.attempts, 0);
    }

    #[test]
    fn verbs_cycle_with_arrows() {
        let mut a = app(Topic::Verbs);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        press(&mut a, KeyCode::Right, now);
        assert!(matches!(a.panel, Panel::Verbs(Verb::Estar)));
        press(&mut a, KeyCode::Left, now);
        press(&mut a, KeyCode::Left, now);
        assert!(matches!(a.panel, Panel::Verbs(Verb::Comer)));
    }

    #[test]
    fn tab_moves_between_form_fields() {
        let mut a = app(Topic::Introduce);
        let now = Instant::now();
        press(&mut a, KeyCode::Tab, now);
        assert_eq!(a.focus, Focus::Panel);
        press(&mut a, KeyCode::Tab, now);
        press(&mut a, KeyCode::Tab, now);
        let Panel::Form(form) = &a.panel else { panic!("introduce is a form") };
        assert_eq!(form.focus, 2);
        assert_eq!(a.focus, Focus::Panel);

        press(&mut a, KeyCode::BackTab, now);
        let Panel::Form(form) = &a.panel else { unreachable!() };
        assert_eq!(form.focus, 1);

        // ← でサイドバーに戻る
        press(&mut a, KeyCode::Left, now);
        assert_eq!(a.focus, Focus::Sidebar);
        let Panel::Form(form) = &a.panel else { unreachable!() };
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn quit_keys() {
        let mut a = app(Topic::Welcome);
        press(&mut a, KeyCode::Char('q'), Instant::now());
        assert!(a.should_quit);

        // パネルでは q は文字入力
        let mut b = app(Topic::Introduce);
        press(&mut b, KeyCode::Tab, Instant::now());
        press(&mut b, KeyCode::Char('q'), Instant::now());
        assert!(!b.should_quit);
        press(&mut b, KeyCode::Esc, Instant::now());
        assert!(b.should_quit);
    }
}
