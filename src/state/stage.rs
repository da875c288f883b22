//! Stage-view selection and snapshot replacement rules.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use crate::net::types::WorkStatus;

/// The view rendered under the step bar for one pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageView {
    Idle,
    Generating,
    Answering,
    Grading,
    Tuning,
    Evaluating,
}

impl StageView {
    /// Exactly one view per status.
    #[must_use]
    pub fn for_status(status: WorkStatus) -> Self {
        match status {
            WorkStatus::Idle => Self::Idle,
            WorkStatus::Generating => Self::Generating,
            WorkStatus::Answering => Self::Answering,
            WorkStatus::Grading => Self::Grading,
            WorkStatus::Tuning => Self::Tuning,
            WorkStatus::Evaluating => Self::Evaluating,
        }
    }

    /// The status during which this view is active.
    #[must_use]
    pub fn stage(self) -> WorkStatus {
        match self {
            Self::Idle => WorkStatus::Idle,
            Self::Generating => WorkStatus::Generating,
            Self::Answering => WorkStatus::Answering,
            Self::Grading => WorkStatus::Grading,
            Self::Tuning => WorkStatus::Tuning,
            Self::Evaluating => WorkStatus::Evaluating,
        }
    }

    /// Heading shown at the top of the view.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Idle => "准备开始",
            Self::Generating => "正在生成题目",
            Self::Answering => "正在解答",
            Self::Grading => "正在评分",
            Self::Tuning => "模型微调中",
            Self::Evaluating => "测评进行中",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Idle => "点击开始按钮，启动语料工坊",
            Self::Generating => "请稍候...",
            Self::Answering => "AI正在处理答案...",
            Self::Grading => "正在对答案进行评分...",
            Self::Tuning => "正在根据评分结果优化模型...",
            Self::Evaluating => "正在评估优化效果...",
        }
    }

    /// Whether the view polls a snapshot endpoint while active.
    #[must_use]
    pub fn polls(self) -> bool {
        !matches!(self, Self::Idle | Self::Evaluating)
    }
}

/// Whether `incoming` should replace the current snapshot.
///
/// Equal snapshots are skipped so a steady poll does not re-render.
#[must_use]
pub fn should_replace<T: PartialEq>(current: Option<&T>, incoming: &T) -> bool {
    current != Some(incoming)
}
