//! 导航更新逻辑

use anyhow::Result;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Result<()> {
    let len = app.presets.len();

    match msg {
        NavigationMessage::SelectPrevious => {
            app.apply_error = None;
            app.navigation.select_previous(len);
        }

        NavigationMessage::SelectNext => {
            app.apply_error = None;
            app.navigation.select_next(len);
        }

        NavigationMessage::Confirm => {
            // 提示显示期间已经写过一次，不再重复写入
            if app.banner.is_some() {
                return Ok(());
            }

            let Some(preset) = app.selected_preset() else {
                return Ok(());
            };

            tracing::info!(preset = %preset.name, "Applying DNS preset");
            match app.applier.apply(preset) {
                Ok(applied) => app.show_banner(applied),
                // 网关或外部命令的问题留在界面上，resolv.conf 本身读写失败才退出
                Err(e) if e.is_expected() => {
                    tracing::warn!(preset = %preset.name, error = %e, "DNS preset not applied");
                    let message = e.to_string();
                    app.show_apply_error(message);
                }
                Err(e) => {
                    let context = format!("Failed to apply DNS preset '{}'", preset.name);
                    return Err(anyhow::Error::new(e).context(context));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_presets, test_app, FakeApplier};

    #[test]
    fn test_select_moves_within_bounds() {
        let (applier, _) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);

        update(&mut app, NavigationMessage::SelectPrevious).unwrap();
        assert_eq!(app.navigation.selected_index, 0);

        for _ in 0..10 {
            update(&mut app, NavigationMessage::SelectNext).unwrap();
        }
        assert_eq!(app.navigation.selected_index, app.presets.len() - 1);
    }

    #[test]
    fn test_confirm_applies_selected_and_shows_banner() {
        let (applier, log) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);

        update(&mut app, NavigationMessage::SelectNext).unwrap();
        update(&mut app, NavigationMessage::Confirm).unwrap();

        assert_eq!(*log.borrow(), vec!["Cloudflare".to_string()]);
        let banner = app.banner.as_ref().unwrap();
        assert_eq!(banner.applied.nameservers, vec!["1.1.1.1", "1.0.0.1"]);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_second_confirm_while_banner_is_ignored() {
        let (applier, log) = FakeApplier::new();
        let mut app = test_app(sample_presets(), applier);

        update(&mut app, NavigationMessage::Confirm).unwrap();
        update(&mut app, NavigationMessage::SelectNext).unwrap();
        update(&mut app, NavigationMessage::Confirm).unwrap();

        assert_eq!(*log.borrow(), vec!["Default DNS".to_string()]);
    }

    #[test]
    fn test_confirm_on_empty_list_is_noop() {
        let (applier, log) = FakeApplier::new();
        let mut app = test_app(Vec::new(), applier);

        update(&mut app, NavigationMessage::Confirm).unwrap();

        assert!(log.borrow().is_empty());
        assert!(app.banner.is_none());
    }

    #[test]
    fn test_missing_gateway_stays_in_picker() {
        let mut app = test_app(sample_presets(), FakeApplier::failing());

        update(&mut app, NavigationMessage::Confirm).unwrap();

        assert!(!app.should_quit);
        assert!(app.banner.is_none());
        assert_eq!(app.apply_error.as_deref(), Some("No default gateway found"));
    }

    #[test]
    fn test_apply_error_cleared_by_navigation() {
        let mut app = test_app(sample_presets(), FakeApplier::failing());

        update(&mut app, NavigationMessage::Confirm).unwrap();
        update(&mut app, NavigationMessage::SelectNext).unwrap();

        assert!(app.apply_error.is_none());
    }

    #[test]
    fn test_resolver_io_failure_propagates() {
        let mut app = test_app(sample_presets(), FakeApplier::failing_io());

        let err = update(&mut app, NavigationMessage::Confirm).unwrap_err();

        assert!(err.to_string().contains("Default DNS"));
        assert!(format!("{err:#}").contains("/etc/resolv.conf"));
        assert!(app.banner.is_none());
    }
}
