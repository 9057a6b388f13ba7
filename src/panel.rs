// ============================================
// src/panel.rs
// トピックごとの画面状態
// ============================================

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::grammar::Verb;
use crate::quiz::{Answer, Feedback, QuizKind, Question, Score};
use crate::templates::Template;
use crate::topics::Topic;
use crate::vocab::FLASHCARDS;

/// フラッシュカードの列数 (上下移動の幅)
pub const FLASHCARD_COLUMNS: usize = 4;

/// 回答後に予約される「次の問題へ」(1 パネルにつき最大 1 つ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    due: Instant,
}

impl PendingAdvance {
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// 待ち時間に倍率をかける (変換できない倍率なら元の待ち時間)
fn scaled_delay(delay: Duration, scale: f64) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * scale).unwrap_or(delay)
}

/// クイズ 1 つ分の状態
#[derive(Debug)]
pub struct QuizPanel {
    pub kind: QuizKind,
    pub question: Question,
    pub input: String,
    pub feedback: Option<Feedback>,
    /// 選択式のカーソル (グループ, 選択肢)
    pub cursor: (usize, usize),
    pub score: Score,
    delay: Duration,
    pending: Option<PendingAdvance>,
}

impl QuizPanel {
    pub fn new<R: Rng + ?Sized>(kind: QuizKind, rng: &mut R, delay_scale: f64) -> Self {
        Self {
            kind,
            question: kind.draw(rng),
            input: String::new(),
            feedback: None,
            cursor: (0, 0),
            score: Score::default(),
            delay: scaled_delay(kind.delay(), delay_scale),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// 次の問題を待っている間は入力を受け付けない
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_locked() && self.question.is_text() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_locked() {
            self.input.pop();
        }
    }

    /// 選択肢のカーソル移動 (左右)
    pub fn move_option(&mut self, delta: isize) {
        let groups = self.question.groups();
        if let Some(g) = groups.get(self.cursor.0) {
            let len = g.options.len() as isize;
            self.cursor.1 = (self.cursor.1 as isize + delta).rem_euclid(len) as usize;
        }
    }

    /// グループの移動 (上下)
    pub fn move_group(&mut self, delta: isize) {
        let len = self.question.groups().len() as isize;
        if len == 0 {
            return;
        }
        self.cursor.0 = (self.cursor.0 as isize + delta).rem_euclid(len) as usize;
        let options = self.question.groups()[self.cursor.0].options.len();
        self.cursor.1 = self.cursor.1.min(options.saturating_sub(1));
    }

    /// Enter: 自由入力なら入力欄、選択式ならカーソル位置で回答
    pub fn submit_current(&mut self, now: Instant) -> Option<&Feedback> {
        let answer = if self.question.is_text() {
            Answer::Text(self.input.clone())
        } else {
            Answer::Choice {
                group: self.cursor.0,
                option: self.cursor.1,
            }
        };
        self.submit(answer, now)
    }

    /// MARK:回答して次の問題を予約する
    ///
    /// 予約中の回答は無視する (予約は常に 1 つ)
    pub fn submit(&mut self, answer: Answer, now: Instant) -> Option<&Feedback> {
        if self.is_locked() {
            log::debug!("{:?}: answer ignored while advance is pending", self.kind);
            return None;
        }
        let feedback = self.question.check(&answer)?;
        log::info!(
            "{:?}: prompt={:?} answer={:?} correct={}",
            self.kind,
            self.question.prompt,
            answer,
            feedback.correct
        );
        self.score.record(feedback.correct);
        self.feedback = Some(feedback);
        self.pending = Some(PendingAdvance {
            due: now.checked_add(self.delay).unwrap_or(now),
        });
        self.feedback.as_ref()
    }

    /// 期限が来ていれば新しい問題を引く。引いたら true
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                self.question = self.kind.draw(rng);
                self.input.clear();
                self.feedback = None;
                self.cursor = (0, 0);
                true
            }
            _ => false,
        }
    }

    /// パネルを離れるときに予約を取り消す
    pub fn teardown(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("{:?}: pending advance cancelled", self.kind);
        }
    }
}

/// 曜日・月・季節のカード
#[derive(Debug, Default)]
pub struct Flashcards {
    pub cursor: usize,
    pub flipped: HashSet<usize>,
}

impl Flashcards {
    pub fn toggle(&mut self) {
        if !self.flipped.remove(&self.cursor) {
            self.flipped.insert(self.cursor);
        }
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    /// カーソル移動 (範囲外には出ない)
    pub fn move_by(&mut self, delta: isize) {
        let max = FLASHCARDS.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }
}

/// 入力欄つきテンプレート
#[derive(Debug)]
pub struct TemplateForm {
    pub template: Template,
    pub focus: usize,
}

impl TemplateForm {
    pub fn new(template: Template) -> Self {
        Self { template, focus: 0 }
    }

    pub fn move_focus(&mut self, delta: isize) {
        let len = self.template.fields.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.template.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.template.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }
}

/// 表示中のトピックの状態
#[derive(Debug)]
pub enum Panel {
    /// 表を見るだけのトピック
    Static(Topic),
    Quiz(QuizPanel),
    Flashcards(Flashcards),
    Verbs(Verb),
    Form(TemplateForm),
}

impl Panel {
    /// トピックを開くたびに新しく作る (クイズは新しい問題から)
    pub fn open<R: Rng + ?Sized>(topic: Topic, rng: &mut R, delay_scale: f64) -> Self {
        if let Some(kind) = QuizKind::for_topic(topic) {
            return Panel::Quiz(QuizPanel::new(kind, rng, delay_scale));
        }
        match topic {
            Topic::TimeElements => Panel::Flashcards(Flashcards::default()),
            Topic::Verbs => Panel::Verbs(Verb::Ser),
            Topic::Introduce => Panel::Form(TemplateForm::new(Template::introduce())),
            Topic::Describe => Panel::Form(TemplateForm::new(Template::describe())),
            other => Panel::Static(other),
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if let Panel::Quiz(quiz) = self {
            quiz.tick(now, rng);
        }
    }

    pub fn teardown(&mut self) {
        if let Panel::Quiz(quiz) = self {
            quiz.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Expect;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn time_panel(rng: &mut StdRng) -> QuizPanel {
        QuizPanel::new(QuizKind::Time, rng, 1.0)
    }

    #[test]
    fn submit_schedules_one_advance() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut panel = time_panel(&mut rng);
        let t0 = Instant::now();

        for c in "nada".chars() {
            panel.push_char(c);
        }
        let fb = panel.submit_current(t0).cloned().unwrap();
        assert!(!fb.correct);
        let due = panel.pending().unwrap().due();
        assert_eq!(due, t0 + Duration::from_millis(2500));

        // 予約中の 2 回目は無視され、期限も変わらない
        assert!(panel.submit_current(t0 + Duration::from_millis(100)).is_none());
        assert_eq!(panel.pending().unwrap().due(), due);
        assert_eq!(panel.score.attempts, 1);
    }

    #[test]
    fn tick_draws_a_new_question_after_the_delay() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut panel = time_panel(&mut rng);
        let t0 = Instant::now();
        panel.push_char('x');
        panel.submit_current(t0);

        assert!(!panel.tick(t0 + Duration::from_millis(2499), &mut rng));
        assert!(panel.feedback.is_some());

        assert!(panel.tick(t0 + Duration::from_millis(2500), &mut rng));
        assert!(panel.pending().is_none());
        assert!(panel.feedback.is_none());
        assert!(panel.input.is_empty());
    }

    #[test]
    fn teardown_cancels_pending_advance() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut panel = time_panel(&mut rng);
        let t0 = Instant::now();
        panel.submit_current(t0);
        assert!(panel.is_locked());
        let before = panel.question.clone();

        panel.teardown();
        assert!(panel.pending().is_none());
        assert!(!panel.tick(t0 + Duration::from_secs(60), &mut rng));
        assert_eq!(panel.question, before);
    }

    #[test]
    fn correct_text_answer() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut panel = time_panel(&mut rng);
        let Expect::Text { answer, .. } = panel.question.expect.clone() else {
            panic!("time quiz expects text");
        };
        for c in format!("{}.", answer.to_uppercase()).chars() {
            panel.push_char(c);
        }
        assert!(panel.submit_current(Instant::now()).unwrap().correct);
        assert_eq!(panel.score.correct, 1);
        // 待機中は入力できない
        panel.push_char('z');
        assert!(!panel.input.ends_with('z'));
    }

    #[test]
    fn choice_cursor_wraps_and_submits() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut panel = QuizPanel::new(QuizKind::PorPara, &mut rng, 1.0);
        panel.move_option(1);
        assert_eq!(panel.cursor, (0, 1));
        panel.move_option(1);
        assert_eq!(panel.cursor, (0, 0));
        panel.move_option(-1);
        assert_eq!(panel.cursor, (0, 1));
        // 選択式では文字入力は無視
        panel.push_char('a');
        assert!(panel.input.is_empty());
        assert!(panel.submit_current(Instant::now()).is_some());
    }

    #[test]
    fn delay_scale_applies() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut panel = QuizPanel::new(QuizKind::Gender, &mut rng, 0.0);
        let t0 = Instant::now();
        panel.submit_current(t0);
        assert!(panel.tick(t0, &mut rng));
    }

    #[test]
    fn huge_delay_scale_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut panel = QuizPanel::new(QuizKind::Time, &mut rng, 1e20);
        assert_eq!(panel.delay, QuizKind::Time.delay());
        assert_eq!(scaled_delay(Duration::from_secs(2), f64::NAN), Duration::from_secs(2));

        panel.delay = Duration::MAX;
        let now = Instant::now();
        assert!(panel.submit(Answer::Text(String::new()), now).is_some());
        assert_eq!(panel.pending().map(|p| p.due()), Some(now));
    }

    #[test]
    fn flashcards_toggle_and_clamp() {
        let mut cards = Flashcards::default();
        cards.toggle();
        assert!(cards.is_flipped(0));
        cards.toggle();
        assert!(!cards.is_flipped(0));
        cards.move_by(-1);
        assert_eq!(cards.cursor, 0);
        cards.move_by(100);
        assert_eq!(cards.cursor, FLASHCARDS.len() - 1);
    }

    #[test]
    fn form_editing() {
        let mut form = TemplateForm::new(Template::introduce());
        form.move_focus(-1);
        assert_eq!(form.focus, form.template.fields.len() - 1);
        form.move_focus(1);
        form.pop_char();
        form.push_char('!');
        assert_eq!(form.template.fields[0].value, "Hamim Mubtasi!");
    }

    #[test]
    fn open_builds_the_right_panel() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(Panel::open(Topic::Time, &mut rng, 1.0), Panel::Quiz(_)));
        assert!(matches!(Panel::open(Topic::Verbs, &mut rng, 1.0), Panel::Verbs(Verb::Ser)));
        assert!(matches!(Panel::open(Topic::TimeElements, &mut rng, 1.0), Panel::Flashcards(_)));
        assert!(matches!(Panel::open(Topic::Describe, &mut rng, 1.0), Panel::Form(_)));
        assert!(matches!(
            Panel::open(Topic::Nationalities, &mut rng, 1.0),
            Panel::Static(Topic::Nationalities)
        ));
    }
}
