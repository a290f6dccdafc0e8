//! Mood- and time-aware productivity coaching.

use super::WellnessAgent;
use crate::domain::inference::templates::{self, tips};
use crate::domain::inference::{CoachingPayload, CoachingTip, TipKind};
use crate::domain::wellness::{Emotion, MoodCategory};
use crate::ports::{CompletionPurpose, CompletionRequest, Generation};

/// Part of the day used for greetings and coaching context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// Inputs to one coaching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingContext {
    pub mood: String,
    pub hour: u8,
    pub last_break_minutes: u32,
    pub is_working: bool,
}

impl CoachingContext {
    pub fn new(mood: impl Into<String>, hour: u8, last_break_minutes: u32, is_working: bool) -> Self {
        Self {
            mood: mood.into(),
            hour: hour.min(23),
            last_break_minutes,
            is_working,
        }
    }

    fn emotion(&self) -> Emotion {
        Emotion::from_name(&self.mood)
    }

    fn is_late_night(&self) -> bool {
        self.hour >= 22 || self.hour < 6
    }
}

fn coach_system_prompt(ctx: &CoachingContext, time: TimeOfDay) -> String {
    let mood_note = match ctx.emotion().category() {
        MoodCategory::Positive => "positive energy!",
        MoodCategory::Struggling => "needs gentle support",
        MoodCategory::Neutral => "neutral/ready",
    };

    format!(
        "You are a warm, wise productivity coach who deeply respects mental health.\n\n\
         Your coaching style:\n\
         - EMPATHETIC: Always acknowledge feelings before suggesting action\n\
         - HUMANE: Never pushy or guilt-tripping. Growth happens gently.\n\
         - PRACTICAL: Give specific, actionable micro-steps\n\
         - ENCOURAGING: Highlight what they're already doing well\n\
         - HONEST: Real talk, but delivered with kindness\n\n\
         CURRENT CONTEXT:\n\
         - Time: {time} ({hour}:00)\n\
         - Mood: {mood} ({mood_note})\n\
         - Working: {working}\n\
         - Last break: {minutes} min ago\n\n\
         Your response should be 2-3 sentences max. Be specific, not generic. \
         Make them feel seen and supported.",
        time = time.as_str(),
        hour = ctx.hour,
        mood = ctx.mood,
        mood_note = mood_note,
        working = ctx.is_working,
        minutes = ctx.last_break_minutes,
    )
}

impl WellnessAgent {
    /// Coaching tips for the user's mood, time of day and break history.
    ///
    /// Tip selection depends only on the hour, break minutes, working flag
    /// and mood category; randomness only varies the phrasing. The tip list
    /// is never empty.
    pub async fn mind_coach(&self, ctx: &CoachingContext) -> CoachingPayload {
        let emotion = ctx.emotion();
        let tone = templates::coaching_tone_for(emotion);
        let time = TimeOfDay::from_hour(ctx.hour);
        let mental_check = self.pick(tone.mental_checks);

        let mut productivity_tips = self.contextual_tips(ctx, emotion);

        if self.has_provider() {
            if let Some(message) = self.coach_tip(ctx, time).await {
                productivity_tips.push(CoachingTip::new(
                    TipKind::Coach,
                    "🧠",
                    "Your Mind Coach",
                    message,
                ));
            }
        }

        if productivity_tips.is_empty() {
            let message = if mental_check.is_empty() {
                tips::ENCOURAGEMENT.to_string()
            } else {
                mental_check.clone()
            };
            productivity_tips.push(CoachingTip::new(
                TipKind::Encouragement,
                "💪",
                "You've Got This",
                message,
            ));
        }

        CoachingPayload {
            productivity_tips,
            mental_check,
            time_greeting: format!("Good {}!", time.as_str()),
            productivity_focus: tone.productivity_focus.to_string(),
        }
    }

    fn contextual_tips(&self, ctx: &CoachingContext, emotion: Emotion) -> Vec<CoachingTip> {
        let mut found = Vec::new();

        if ctx.is_late_night() {
            found.push(CoachingTip::new(
                TipKind::Rest,
                "🌙",
                "Rest is Productive",
                self.pick(tips::REST),
            ));
        } else if (6..9).contains(&ctx.hour) {
            found.push(CoachingTip::new(
                TipKind::Morning,
                "☀️",
                "Morning Power Hour",
                self.pick(tips::MORNING),
            ));
        } else if (14..16).contains(&ctx.hour) {
            found.push(CoachingTip::new(
                TipKind::Energy,
                "🔋",
                "Afternoon Recharge",
                self.pick(tips::AFTERNOON),
            ));
        }

        if ctx.is_working && ctx.last_break_minutes > self.limits.break_threshold_minutes {
            let tip = if emotion.category() == MoodCategory::Struggling {
                CoachingTip::new(
                    TipKind::Break,
                    "🌿",
                    "Gentle Pause",
                    self.pick(tips::GENTLE_BREAK),
                )
            } else {
                CoachingTip::new(
                    TipKind::Break,
                    "🚀",
                    "Strategic Break",
                    self.pick(tips::STRATEGIC_BREAK),
                )
            };
            found.push(tip);
        }

        if ctx.is_working && ctx.last_break_minutes > self.limits.hydration_threshold_minutes {
            found.push(CoachingTip::new(
                TipKind::Hydration,
                "💧",
                "Hydrate Your Brain",
                self.pick(tips::HYDRATION),
            ));
        }

        found
    }

    async fn coach_tip(&self, ctx: &CoachingContext, time: TimeOfDay) -> Option<String> {
        let request = CompletionRequest::new(
            CompletionPurpose::Coaching,
            format!(
                "Give me one personalized coaching insight that honors my {} mood while gently encouraging growth.",
                ctx.mood
            ),
        )
        .with_system_prompt(coach_system_prompt(ctx, time))
        .with_temperature(0.85)
        .with_max_tokens(120);

        match self.generator.generate(request).await {
            Generation::Generated { text, .. } if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}
