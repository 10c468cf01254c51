/// Trait for runtime configurations that know how to build the value they describe.
pub trait Build {
    /// The value described by this configuration.
    type Output;

    /// The reason why [`Build::Output`] could not be built.
    type Error;

    /// Consumes the configuration and builds an instance of [`Build::Output`].
    fn build(self) -> Result<Self::Output, Self::Error>;
}
