use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NavigationService: Send + Sync + 'static {
    /// Open `url` in a new top-level window without replacing the current
    /// page.
    ///
    /// Fire-and-forget: nothing is reported back, not even whether the
    /// window could be opened.
    fn open_new_window(&self, url: &Url);
}

#[cfg(feature = "mock")]
impl MockNavigationService {
    pub fn with_open_new_window(mut self, url: Url) -> Self {
        self.expect_open_new_window()
            .once()
            .with(mockall::predicate::eq(url))
            .return_const(());
        self
    }
}
