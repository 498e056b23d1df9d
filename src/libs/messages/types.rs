#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuHeader,
    MenuAddProject,
    MenuListProjects,
    MenuSelectProject,
    MenuUpdateProject,
    MenuDeleteProject,
    NoProjectChosen,
    WorkingOn(String), // project overview
    ChooseProjectFirst,
    ActionFailed(String), // error text
    Goodbye,
    CommandFailed(String),

    // === PROJECT MESSAGES ===
    ProjectCreated(String), // project overview
    ProjectUpdated,
    ProjectDeleted(i32),
    ProjectSelected(String),
    ProjectsHeader,
    NoProjectsFound,
    NothingToUpdate,
    OperationCancelled,
    ConfirmDeleteProject(i32),

    // === PROMPTS ===
    PromptProjectName,
    PromptEstimatedHours,
    PromptActualHours,
    PromptDifficulty,
    PromptNotes,
    PromptProjectId,
    PromptDatabasePath,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigSaveError(String),
    ConfigParseError(String),
    ConfigCurrentDatabase(String),

    // === DATABASE MESSAGES ===
    DbOpened(String),
    DbStatement(String),
    RollbackFailed(String),
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseMissing(String),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NoMigrationsApplied,
}
