use crate::commands::Out;
use crate::Tracker;
use anyhow::Result;

/// Creates the PIN that locks the tracker and leaves the session unlocked.
pub async fn set_pin(tracker: &mut Tracker, pin: &str, confirm: &str) -> Result<Out<()>> {
    tracker.create_pin(pin, confirm).await?;
    Ok("PIN created. You will need it for every other command.".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_set_pin_command() {
        let env = TestEnv::new();
        let mut tracker = Tracker::open(env.home()).await.unwrap();
        let out = set_pin(&mut tracker, "1234", "1234").await.unwrap();
        assert!(out.message().contains("PIN created"));
        assert!(tracker.is_pin_configured());
    }

    #[tokio::test]
    async fn test_set_pin_mismatch_fails() {
        let env = TestEnv::new();
        let mut tracker = Tracker::open(env.home()).await.unwrap();
        assert!(set_pin(&mut tracker, "1234", "4321").await.is_err());
        assert!(!tracker.is_pin_configured());
    }
}
