use visionaria_models::contact::ContactChannels;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Return the direct contact channels that bypass the lead form and the
    /// location shown on the map.
    fn get_channels(&self) -> ContactChannels;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_get_channels(mut self, result: ContactChannels) -> Self {
        self.expect_get_channels().once().return_const(result);
        self
    }
}
