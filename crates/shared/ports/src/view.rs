/// Port for the surface that displays the answer
///
/// Receives the already-mapped label ("Yes" / "No"); an unset answer is
/// never forwarded, so implementations keep whatever they showed last.
pub trait AnswerView: Send {
    fn show(&mut self, text: &str);
}
