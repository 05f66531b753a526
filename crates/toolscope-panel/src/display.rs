/// The image-bearing surface the panel drives.
///
/// Implemented by whatever hosts the panel: a real widget, a web view
/// binding, or a test double. The controller only ever reads the size,
/// reads the current source and assigns a new one.
pub trait DisplayTarget {
    /// Current render width of the image slot, in pixels.
    fn width(&self) -> u32;

    /// Current render height of the image slot, in pixels.
    fn height(&self) -> u32;

    /// URL currently assigned to the image slot.
    fn source(&self) -> String;

    /// Point the image slot at a new URL. Assignment supersedes any
    /// in-flight load; the controller never waits for completion.
    fn set_source(&mut self, source: String);
}
