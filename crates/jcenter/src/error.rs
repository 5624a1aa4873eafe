#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot discover the installed Jenkins version: no Jenkins URL configured. Pass --version or set --jenkins-url / JENKINS_URL")]
    MissingJenkinsUrl,

    #[error("Cannot get the version of current Jenkins ({0}). Please check the status of your Jenkins and your credentials")]
    VersionUnavailable(String),

    #[error("Release feed unavailable: {0}")]
    SourceUnavailable(String),
}
