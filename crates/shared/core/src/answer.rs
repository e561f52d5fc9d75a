/// Shown when today is the holiday
pub const YES: &str = "Yes";

/// Shown when today is not the holiday
pub const NO: &str = "No";

/// Display text for an answer; `None` when no answer has been published yet
pub fn label(answer: Option<bool>) -> Option<&'static str> {
    answer.map(|is_holiday| if is_holiday { YES } else { NO })
}
