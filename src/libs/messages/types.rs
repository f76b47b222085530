#[derive(Debug, Clone)]
pub enum Message {
    // === VALIDATION MESSAGES ===
    ValidatingPair,
    ValidatingRemoteFolder,
    LocalFolderInvalid(String),       // path
    RemoteSelectionInvalid(usize),    // index
    RemoteFolderShapeInvalid(String), // folder
    RemoteFolderNotFound(String),     // folder

    // === REMOTE MESSAGES ===
    RemotesFound(usize),           // count
    RemoteListItem(usize, String), // index, alias

    // === PAIR MESSAGES ===
    PairNameEmpty,
    PairNameTaken(String), // name
    PairSaved(String),     // name
    PairNameLabel,
    PairLocalLabel,
    PairRemoteLabel,
    PairListHeader,
    NoPairsFound,
    NextStepsHeader,
    HintPull(String), // name
    HintPush(String), // name

    // === SYNC MESSAGES ===
    PullStarted,
    PullCompleted,
    PushStarted,
    PushCompleted,
    RunningTool(String), // rendered command line

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleRclone,
    ConfigLoadFailed(String), // error message

    // === PROMPTS ===
    PromptLocalPath,
    PromptSelectRemote,
    PromptRemoteFolder,
    PromptPairName,
    PromptRcloneBinary,
    PromptShowProgress,
    PromptTimeout,
}
