use sourcefold::{
    FilterSpec,
    FilterSpecBuilder,
    FoldError,
    MediaTypeClassifier,
    TreeNode,
    assemble,
    describe,
};
use std::fs;
use tempfile::tempdir;

fn block_paths(document: &sourcefold::RenderedDocument) -> Vec<&str> {
    document.blocks.iter().map(|b| b.path.as_str()).collect()
}

#[test]
fn test_empty_spec_includes_everything() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join(".hidden"), "h").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "b").unwrap();
    let result = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(block_paths(&result), vec![".hidden", "a.txt", "sub/b.txt"]);
}

#[test]
fn test_include_extensions() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("src/a.py"), "print(1)").unwrap();
    fs::write(dir.path().join("docs/readme.md"), "hello").unwrap();
    let spec = FilterSpecBuilder::new()
        .include_extensions(vec!["py".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].path, "src/a.py");
    assert_eq!(result.blocks[0].content, "print(1)");
}

#[test]
fn test_exclude_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.py"), "a").unwrap();
    fs::write(dir.path().join("src/b.py"), "b").unwrap();
    let spec = FilterSpecBuilder::new()
        .exclude_files(vec!["b.py".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["src/a.py"]);
}

#[test]
fn test_exclude_wins_over_include() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    let spec = FilterSpecBuilder::new()
        .include_files(vec!["a.py".into()])
        .exclude_extensions(vec!["py".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_extension_entries_are_normalized() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.PY"), "a").unwrap();
    fs::write(dir.path().join("b.md"), "b").unwrap();
    let spec = FilterSpecBuilder::new()
        .include_extensions(vec![".Py".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["a.PY"]);
}

#[test]
fn test_folder_filters() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top.txt"), "t").unwrap();
    fs::create_dir_all(dir.path().join("src/deep")).unwrap();
    fs::write(dir.path().join("src/b.txt"), "b").unwrap();
    fs::write(dir.path().join("src/deep/c.txt"), "c").unwrap();

    let spec = FilterSpecBuilder::new()
        .include_folders(vec!["src".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["src/b.txt"]);

    // root-level files live in folder "."
    let spec = FilterSpecBuilder::new()
        .include_folders(vec![".".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["top.txt"]);

    let spec = FilterSpecBuilder::new()
        .exclude_folders(vec!["src/deep".into()])
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["src/b.txt", "top.txt"]);
}

#[test]
fn test_regex_filters() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "a").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.py"), "sa").unwrap();
    fs::write(dir.path().join("src/b.py"), "sb").unwrap();

    let spec = FilterSpecBuilder::new().include_regex("^src/").build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["src/a.py", "src/b.py"]);

    // unanchored search: a bare substring matches anywhere in the path
    let spec = FilterSpecBuilder::new().include_regex("a\\.py").build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["a.py", "src/a.py"]);

    let spec = FilterSpecBuilder::new()
        .include_regex("^src/")
        .exclude_regex("b\\.py")
        .build();
    let result = assemble(dir.path(), &spec).unwrap();
    assert_eq!(block_paths(&result), vec!["src/a.py"]);
}

#[test]
fn test_invalid_regex_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let spec = FilterSpecBuilder::new().include_regex("[").build();
    let result = assemble(dir.path(), &spec);
    assert!(matches!(result, Err(FoldError::InvalidRegex { .. })));
}

#[test]
fn test_root_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        assemble(&missing, &FilterSpec::default()),
        Err(FoldError::RootNotFound(_))
    ));
    assert!(matches!(
        describe(&missing, &MediaTypeClassifier::new()),
        Err(FoldError::RootNotFound(_))
    ));
}

#[test]
fn test_sorted_order_is_deterministic() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    fs::create_dir(dir.path().join("m")).unwrap();
    fs::write(dir.path().join("m/x.txt"), "x").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let first = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(block_paths(&first), vec!["a.txt", "m/x.txt", "z.txt"]);
    let second = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_render_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "hello world").unwrap();
    let result = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(result.render(), "----\n`hello.txt`\n```\nhello world\n```");
}

#[test]
fn test_content_round_trips_verbatim() {
    let dir = tempdir().unwrap();
    let content = "before\n```\nembedded fence\n```\nafter";
    fs::write(dir.path().join("tricky.md"), content).unwrap();
    let result = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(result.blocks[0].content, content);
    assert!(result.render().contains(content));
}

#[test]
fn test_latin1_fallback() {
    let dir = tempdir().unwrap();
    // 0xE9 is not valid UTF-8 on its own; Latin-1 reads it as 'é'
    fs::write(dir.path().join("cafe.txt"), b"caf\xe9").unwrap();
    let result = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(result.blocks[0].content, "café");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_yields_error_marker() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let path = dir.path().join("secret.txt");
    fs::write(&path, "hidden").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&path).is_ok() {
        // running with CAP_DAC_OVERRIDE; permissions cannot be exercised
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }
    let result = assemble(dir.path(), &FilterSpec::default()).unwrap();
    assert_eq!(result.blocks.len(), 1);
    assert!(
        result.blocks[0]
            .content
            .starts_with("Error: Could not read file content")
    );
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
}

fn child<'a>(node: &'a TreeNode, name: &str) -> &'a TreeNode {
    match node {
        TreeNode::Folder { children, .. } => children
            .iter()
            .find(|c| c.name() == name)
            .unwrap_or_else(|| panic!("no child named {}", name)),
        TreeNode::File { .. } => panic!("{} is not a folder", node.name()),
    }
}

fn file_info(node: &TreeNode) -> (&str, bool) {
    match node {
        TreeNode::File {
            media_type,
            is_text,
            ..
        } => (media_type.as_str(), *is_text),
        TreeNode::Folder { name, .. } => panic!("{} is a folder", name),
    }
}

#[test]
fn test_describe_structure() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.py"), "print(1)").unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();
    fs::write(dir.path().join("blob"), vec![0, 1, 2, 3]).unwrap();

    let tree = describe(dir.path(), &MediaTypeClassifier::new()).unwrap();
    assert!(tree.is_folder());

    assert_eq!(
        file_info(child(&tree, "data.json")),
        ("application/json", true)
    );
    assert_eq!(
        file_info(child(&tree, "blob")),
        ("application/octet-stream", false)
    );
    assert_eq!(
        file_info(child(child(&tree, "src"), "main.py")),
        ("application/x-python", true)
    );
}

#[test]
fn test_describe_empty_file_sentinel() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), "").unwrap();
    let tree = describe(dir.path(), &MediaTypeClassifier::new()).unwrap();
    assert_eq!(
        file_info(child(&tree, "empty.bin")),
        ("inode/x-empty", true)
    );
}

#[test]
fn test_describe_unknown_extension_sniffs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.xyz"), "plain text notes").unwrap();
    let tree = describe(dir.path(), &MediaTypeClassifier::new()).unwrap();
    assert_eq!(file_info(child(&tree, "notes.xyz")), ("text/plain", true));
}
