//! Canned text used both to steer the model and to answer without one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::wellness::Emotion;

/// How to approach reflection for a given mood.
#[derive(Debug, Clone, Copy)]
pub struct MoodStrategy {
    pub goal: &'static str,
    pub approach: &'static str,
    pub tone: &'static str,
    pub example_prompts: &'static [&'static str],
}

const HAPPY: MoodStrategy = MoodStrategy {
    goal: "maintain and share your joy",
    approach: "gratitude amplification",
    tone: "celebratory and warm",
    example_prompts: &[
        "What specific moment sparked this happiness? How can you create more of these?",
        "Who would you love to share this good mood with today?",
        "What simple thing could you do right now to extend this feeling?",
    ],
};

const CALM: MoodStrategy = MoodStrategy {
    goal: "deepen your inner peace",
    approach: "mindful presence",
    tone: "gentle and contemplative",
    example_prompts: &[
        "Let this calm wash over you. What does your body feel like in this peaceful state?",
        "Is there an area of your life where this calmness could bring clarity?",
        "What sound, sight, or sensation is anchoring you in this moment?",
    ],
};

const ANXIOUS: MoodStrategy = MoodStrategy {
    goal: "ground yourself and find perspective",
    approach: "grounding and gentle reassurance",
    tone: "soothing and practical",
    example_prompts: &[
        "Name 5 things you can see right now. Let's come back to this moment together.",
        "What's one small thing within your control right now? Focus just on that.",
        "This feeling will pass. What has helped you through anxious moments before?",
    ],
};

const SAD: MoodStrategy = MoodStrategy {
    goal: "honor your feelings while finding gentle light",
    approach: "validation with gentle hope",
    tone: "compassionate and understanding",
    example_prompts: &[
        "It's okay to feel this way. What would you say to a friend feeling the same?",
        "Even on hard days, there are tiny moments of okay. Can you find one today?",
        "Your feelings matter. What does your heart need most right now?",
    ],
};

const ANGRY: MoodStrategy = MoodStrategy {
    goal: "release safely and understand the source",
    approach: "acknowledgment and healthy release",
    tone: "validating but calming",
    example_prompts: &[
        "Your anger is valid. What boundary was crossed? What do you need?",
        "Imagine putting this anger into a balloon and watching it float away. How does that feel?",
        "Underneath anger often lies hurt. What might be beneath the surface?",
    ],
};

const NEUTRAL: MoodStrategy = MoodStrategy {
    goal: "explore what brings you alive",
    approach: "gentle curiosity",
    tone: "inviting and curious",
    example_prompts: &[
        "In this neutral space, what would bring a spark of excitement to your day?",
        "What's something you've been curious about but haven't explored yet?",
        "If you could do anything right now with no obligations, what would you choose?",
    ],
};

pub fn strategy_for(emotion: Emotion) -> &'static MoodStrategy {
    match emotion {
        Emotion::Happy => &HAPPY,
        Emotion::Calm => &CALM,
        Emotion::Anxious => &ANXIOUS,
        Emotion::Sad => &SAD,
        Emotion::Angry => &ANGRY,
        Emotion::Neutral => &NEUTRAL,
    }
}

/// Coaching voice for a given mood.
#[derive(Debug, Clone, Copy)]
pub struct CoachingTone {
    pub mental_checks: &'static [&'static str],
    pub productivity_focus: &'static str,
}

pub fn coaching_tone_for(emotion: Emotion) -> CoachingTone {
    match emotion {
        Emotion::Happy => CoachingTone {
            mental_checks: &[
                "Your positive energy is wonderful! Let's channel it into something meaningful.",
                "Happiness is fuel for great things. What would you love to accomplish?",
                "Love seeing you in a good place! This is the perfect time for focused work.",
            ],
            productivity_focus: "leverage this energy for meaningful progress",
        },
        Emotion::Calm => CoachingTone {
            mental_checks: &[
                "This peaceful state is perfect for deep work. Your mind is clear and ready.",
                "Calmness is a superpower. You can tackle complex tasks with clarity right now.",
                "In this centered state, you're capable of incredible focus.",
            ],
            productivity_focus: "use this clarity for deep, meaningful work",
        },
        Emotion::Anxious => CoachingTone {
            mental_checks: &[
                "I see you're feeling anxious. That's okay. Let's take things gently, one small step at a time.",
                "Anxiety can feel overwhelming. Remember: you don't have to do everything. What's ONE tiny thing?",
                "Your wellbeing matters more than any task. Let's focus only on what truly needs attention.",
            ],
            productivity_focus: "break things into tiny, manageable pieces - no pressure",
        },
        Emotion::Sad => CoachingTone {
            mental_checks: &[
                "I'm here with you. On days like this, even small accomplishments are victories.",
                "It's okay to move slowly today. What's one gentle thing you can do for yourself?",
                "Sadness is heavy. Be kind to yourself. Any progress today is meaningful.",
            ],
            productivity_focus: "gentle, self-compassionate micro-steps only",
        },
        Emotion::Angry => CoachingTone {
            mental_checks: &[
                "I hear you. Anger often has good reasons. Let's channel that energy constructively.",
                "That fire you're feeling? It can fuel action. What needs to change?",
                "Your anger is valid. Let's use this intensity purposefully, not destructively.",
            ],
            productivity_focus: "channel this energy into constructive action",
        },
        Emotion::Neutral => CoachingTone {
            mental_checks: &[
                "A neutral state is a clean slate. What would make today feel worthwhile?",
                "No strong emotions pulling you - that's actually great for getting things done.",
                "This is a steady state. What's one thing that would give you a sense of accomplishment?",
            ],
            productivity_focus: "set an intentional direction for the day",
        },
    }
}

pub mod tips {
    pub const REST: &[&str] = &[
        "Your best work tomorrow depends on rest tonight. Consider winding down.",
        "Late-night productivity is usually borrowed from tomorrow. Time to recharge?",
        "Sleep is when your brain processes and consolidates. Consider calling it a night.",
    ];

    pub const MORNING: &[&str] = &[
        "Your mind is fresh. What's the ONE most important thing for today?",
        "Morning energy is premium fuel. Don't waste it on emails - tackle something meaningful!",
        "Set one clear intention for today. What will make you feel accomplished?",
    ];

    pub const AFTERNOON: &[&str] = &[
        "Afternoon dip? That's biology, not laziness. A 10-min walk can reset your brain.",
        "If focus is fading, switch to a different type of task - variety sparks energy.",
        "This is a great time for collaborative or creative work. Save deep focus for later.",
    ];

    pub const GENTLE_BREAK: &[&str] = &[
        "You've been at it for a while. A short break isn't weakness - it's wisdom.",
        "Step away for a few minutes. Sometimes the best insights come when we rest.",
        "Your brain needs small breaks to stay healthy. Even 3 minutes helps.",
    ];

    pub const STRATEGIC_BREAK: &[&str] = &[
        "Top performers take breaks every 50-90 min. Time to refresh!",
        "A 5-minute break now = better focus for the next hour.",
        "Movement boosts creativity. Quick stretch, then back to it?",
    ];

    pub const HYDRATION: &[&str] = &[
        "Your brain is 75% water. A glass now = better thinking in 10 minutes.",
        "Quick hydration check! Even mild dehydration affects focus.",
        "Water break! Your body and mind will thank you.",
    ];

    pub const ENCOURAGEMENT: &str = "You're doing great. Take things one step at a time.";
}

/// Picks one of `options` using the supplied randomness source.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}
