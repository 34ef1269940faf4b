use nametree_core::event::Command;

/// The walkthrough replayed by `nametree demo`.
pub fn demo_commands() -> Vec<Command> {
    vec![
        Command::ShowPath,
        Command::CreateFolder("Documentos".into()),
        Command::CreateFile {
            name: "nota.txt".into(),
            size_bytes: 1024,
        },
        Command::Enter("Documentos".into()),
        Command::ShowPath,
        Command::CreateFile {
            name: "informe.doc".into(),
            size_bytes: 2048,
        },
        Command::CreateFolder("Fotos".into()),
        Command::Enter("Fotos".into()),
        Command::ShowPath,
        Command::Ascend,
        Command::ShowPath,
        Command::Ascend,
        Command::ShowPath,
        Command::Ascend,
        Command::List,
        Command::Snapshot,
    ]
}
