mod common;

#[cfg(test)]
mod tests {
    use super::common::FakeTool;
    use folder_sync::commands::show::{self, ShowArgs};
    use folder_sync::commands::sync::{cmd, SyncArgs};
    use folder_sync::commands::list;
    use folder_sync::libs::error::SyncError;
    use folder_sync::libs::pair::{Pair, PairStore};
    use folder_sync::libs::sync::Direction;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        temp_dir: TempDir,
        store: PairStore,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut store = PairStore::load(temp_dir.path().join("pairs.json")).unwrap();
            let local = temp_dir.path().to_string_lossy().into_owned();
            store.create(Pair::new("docs", &local, "gdrive:docs/")).unwrap();
            store.create(Pair::new("stale", "/definitely/not/here", "gone:old/")).unwrap();
            CommandTestContext { temp_dir, store }
        }
    }

    fn args(name: &str, use_copy: bool, fast: bool) -> SyncArgs {
        SyncArgs {
            name: name.to_string(),
            use_copy,
            fast,
        }
    }

    fn sync_error(error: &anyhow::Error) -> &SyncError {
        error.downcast_ref::<SyncError>().expect("error should be a SyncError")
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_pull_unknown_pair(ctx: &mut CommandTestContext) {
        let tool = FakeTool::new(&["gdrive:"], &["docs/"]);

        let error = cmd(Direction::Pull, args("missingname", false, false), &ctx.store, &tool).unwrap_err();

        assert!(matches!(sync_error(&error), SyncError::NotFound(name) if name == "missingname"));
        assert!(tool.calls().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_missing_tool_aborts_first(ctx: &mut CommandTestContext) {
        let mut tool = FakeTool::new(&["gdrive:"], &["docs/"]);
        tool.available = false;

        let error = cmd(Direction::Push, args("docs", false, true), &ctx.store, &tool).unwrap_err();

        assert!(matches!(sync_error(&error), SyncError::ToolUnavailable(_)));
        assert!(tool.calls().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_push_validates_then_mirrors(ctx: &mut CommandTestContext) {
        let tool = FakeTool::new(&["gdrive:"], &["docs/"]);

        cmd(Direction::Push, args("docs", false, false), &ctx.store, &tool).unwrap();

        let local = ctx.temp_dir.path().to_string_lossy().into_owned();
        assert!(tool.query_count() > 0);
        assert_eq!(
            tool.transfers(),
            vec![super::common::Call::Transfer("sync".to_string(), local, "gdrive:docs/".to_string())]
        );
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_invalid_pair_fails_without_fast(ctx: &mut CommandTestContext) {
        let tool = FakeTool::new(&["gdrive:"], &["docs/"]);

        let error = cmd(Direction::Pull, args("stale", false, false), &ctx.store, &tool).unwrap_err();

        assert!(matches!(sync_error(&error), SyncError::InvalidLocal(_)));
        assert!(tool.transfers().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_fast_skips_all_validation(ctx: &mut CommandTestContext) {
        let tool = FakeTool::new(&[], &[]);

        cmd(Direction::Pull, args("stale", true, true), &ctx.store, &tool).unwrap();

        assert_eq!(tool.query_count(), 0);
        assert_eq!(
            tool.transfers(),
            vec![super::common::Call::Transfer(
                "copy".to_string(),
                "gone:old/".to_string(),
                "/definitely/not/here".to_string()
            )]
        );
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_tool_diagnostics_do_not_fail_command(ctx: &mut CommandTestContext) {
        let mut tool = FakeTool::new(&["gdrive:"], &["docs/"]);
        tool.transfer_output.exit_code = Some(1);
        tool.transfer_output.stderr = "Failed to sync: permission denied".to_string();

        assert!(cmd(Direction::Push, args("docs", false, true), &ctx.store, &tool).is_ok());
        assert_eq!(tool.transfers().len(), 1);
    }

    #[test]
    fn test_list_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = PairStore::load(temp_dir.path().join("pairs.json")).unwrap();

        assert!(list::cmd(&store).is_ok());
        assert!(store.is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_and_show_existing_pair(ctx: &mut CommandTestContext) {
        assert!(list::cmd(&ctx.store).is_ok());
        assert!(show::cmd(ShowArgs { name: "docs".to_string() }, &ctx.store).is_ok());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_show_unknown_pair(ctx: &mut CommandTestContext) {
        let error = show::cmd(ShowArgs { name: "missingname".to_string() }, &ctx.store).unwrap_err();

        assert!(matches!(sync_error(&error), SyncError::NotFound(name) if name == "missingname"));
    }
}
