use std::collections::HashMap;

use crate::domain::{Channel, ReleaseVersion, Tag};

/// Values handed to the stamping helper
#[derive(Debug, Clone)]
pub struct StampContext {
    pub version: String,
    pub channel: Channel,
    pub tag: String,
}

impl StampContext {
    pub fn new(version: &ReleaseVersion, tag: &Tag) -> Self {
        StampContext {
            version: version.version.clone(),
            channel: version.channel,
            tag: tag.name.clone(),
        }
    }

    /// Maps context fields to TAG_RELEASE_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("TAG_RELEASE_VERSION".to_string(), self.version.clone());
        env.insert("TAG_RELEASE_CHANNEL".to_string(), self.channel.to_string());
        env.insert("TAG_RELEASE_TAG".to_string(), self.tag.clone());
        env
    }

    /// Substitute `{version}`, `{channel}` and `{tag}` in one argument
    pub fn expand(&self, arg: &str) -> String {
        arg.replace("{version}", &self.version)
            .replace("{channel}", self.channel.as_str())
            .replace("{tag}", &self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagScheme;

    fn context(input: &str) -> StampContext {
        let version = ReleaseVersion::resolve(input, true);
        let tag = TagScheme::default().tag_for(&version);
        StampContext::new(&version, &tag)
    }

    #[test]
    fn test_env_vars() {
        let env = context("3.0.0rc2").to_env_vars();
        assert_eq!(env.len(), 3);
        assert_eq!(env.get("TAG_RELEASE_VERSION"), Some(&"3.0.0-rc.2".to_string()));
        assert_eq!(env.get("TAG_RELEASE_CHANNEL"), Some(&"pre-release".to_string()));
        assert_eq!(
            env.get("TAG_RELEASE_TAG"),
            Some(&"pre-releases/3.0.0-rc.2".to_string())
        );
    }

    #[test]
    fn test_expand_placeholders() {
        let ctx = context("2.0.0");
        assert_eq!(ctx.expand("--version={version}"), "--version=2.0.0");
        assert_eq!(ctx.expand("{channel}:{tag}"), "release:releases/2.0.0");
        assert_eq!(ctx.expand("plain"), "plain");
    }
}
