//! 端到端分析测试
//!
//! 真实工具链测试需要 cc / ar / nm:
//! `cargo test -p slib --test archive_analysis -- --ignored`

use async_trait::async_trait;
use inspect::{ArchiveInspector, BinutilsInspector, InspectError};
use slib::{
    find_leaves, load, save, verify, ArchiveAnalyzer, CandidateRow, SlibError, TableRenderer,
    Verdict,
};
use std::path::Path;
use std::process::Command;

/// 返回固定输出的检查器
struct CannedInspector {
    members: &'static str,
    dump: &'static str,
}

#[async_trait]
impl ArchiveInspector for CannedInspector {
    async fn list_members(&self, _archive: &Path) -> inspect::Result<String> {
        Ok(self.members.to_string())
    }

    async fn symbol_dump(&self, _archive: &Path) -> inspect::Result<String> {
        Ok(self.dump.to_string())
    }
}

/// 总是失败的检查器
struct BrokenInspector;

#[async_trait]
impl ArchiveInspector for BrokenInspector {
    async fn list_members(&self, archive: &Path) -> inspect::Result<String> {
        Err(InspectError::Utf8 {
            command: format!("ar -t {}", archive.display()),
        })
    }

    async fn symbol_dump(&self, _archive: &Path) -> inspect::Result<String> {
        unreachable!("members are listed first")
    }
}

const LIBFOO_MEMBERS: &str = "a.o\nb.o\nc.o\n";

const LIBFOO_DUMP: &str = "
Archive index:
sym1 in a.o
sym2 in b.o

a.o:
0000000000000000 T sym1
                 U sym2

b.o:
0000000000000000 T sym2

c.o:
                 U sym3
";

fn libfoo() -> CannedInspector {
    CannedInspector {
        members: LIBFOO_MEMBERS,
        dump: LIBFOO_DUMP,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_libfoo_graph() {
    let graph = ArchiveAnalyzer::new()
        .analyze(&libfoo(), Path::new("libfoo.a"))
        .await
        .unwrap();

    assert_eq!(graph.library, "libfoo.a");
    assert_eq!(graph.get("a.o").unwrap().dependencies, names(&["b.o"]));
    assert!(graph.get("b.o").unwrap().dependencies.is_empty());

    let c = graph.get("c.o").unwrap();
    assert_eq!(c.unresolved_global, names(&["sym3"]));
    assert!(c.dependencies.is_empty());
}

#[tokio::test]
async fn test_libfoo_leaves() {
    let graph = ArchiveAnalyzer::new()
        .analyze(&libfoo(), Path::new("libfoo.a"))
        .await
        .unwrap();

    let report = find_leaves(&graph);
    assert_eq!(report.leaves, names(&["b.o", "c.o"]));
    assert_eq!(report.total, 3);
    assert_eq!(report.percentage().unwrap(), 67);
    for leaf in &report.leaves {
        assert!(graph.get(leaf).unwrap().dependencies.is_empty());
    }
}

#[tokio::test]
async fn test_libfoo_verification() {
    let graph = ArchiveAnalyzer::new()
        .analyze(&libfoo(), Path::new("libfoo.a"))
        .await
        .unwrap();

    let report = verify(&graph, &names(&["a.o"]));
    assert_eq!(report.verdict(), Verdict::Incomplete);
    assert_eq!(report.incomplete.len(), 1);
    assert_eq!(report.incomplete[0].name, "a.o");
    assert_eq!(report.incomplete[0].missing, names(&["b.o"]));

    let report = verify(&graph, &names(&["a.o", "b.o", "c.o"]));
    assert_eq!(report.verdict(), Verdict::Complete);
}

#[tokio::test]
async fn test_persisted_graph_feeds_reports() {
    let graph = ArchiveAnalyzer::new()
        .analyze(&libfoo(), Path::new("libfoo.a"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libfoo.json");
    save(&graph, &path).unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, graph);

    let report = verify(&loaded, &names(&["c.o", "nope.o"]));
    assert!(report.is_complete());
    assert!(matches!(&report.rows[1], CandidateRow::Unknown { name } if name == "nope.o"));

    let text = TableRenderer::for_graph(&loaded).leaves(&find_leaves(&loaded));
    assert!(text.ends_with("2/3 of all object files or 67%."));
}

#[tokio::test]
async fn test_member_without_section_is_empty() {
    let inspector = CannedInspector {
        members: "a.o\nb.o\nc.o\nstray.o\n",
        dump: LIBFOO_DUMP,
    };
    let graph = ArchiveAnalyzer::new()
        .analyze(&inspector, Path::new("libfoo.a"))
        .await
        .unwrap();

    assert_eq!(graph.len(), 4);
    assert!(graph.get("stray.o").unwrap().is_empty());

    let text = slib::to_string(&graph).unwrap();
    assert!(text.contains("\"stray.o\": \"EMPTY\""));
}

#[tokio::test]
async fn test_inspector_failure_aborts() {
    let err = ArchiveAnalyzer::new()
        .analyze(&BrokenInspector, Path::new("libbroken.a"))
        .await
        .unwrap_err();
    assert!(matches!(err, SlibError::Inspect(_)));
}

fn have_tool(name: &str) -> bool {
    Command::new(name).arg("--version").output().is_ok()
}

#[tokio::test]
#[ignore = "需要 cc, ar 和 nm"]
async fn test_real_archive() {
    if !(have_tool("cc") && have_tool("ar") && have_tool("nm")) {
        eprintln!("跳过测试: 工具链未安装");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let sources = [
        ("a.c", "int sym2(void);\nint sym1(void) { return sym2(); }\n"),
        ("b.c", "int sym2(void) { return 2; }\n"),
        ("c.c", "#include <stdio.h>\nvoid sym3(void) { puts(\"c\"); }\n"),
    ];
    for (file, body) in sources {
        std::fs::write(dir.path().join(file), body).unwrap();
        let status = Command::new("cc")
            .args(["-c", file])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(status.success());
    }
    let status = Command::new("ar")
        .args(["rcs", "libfoo.a", "a.o", "b.o", "c.o"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let archive = dir.path().join("libfoo.a");
    let graph = ArchiveAnalyzer::new()
        .analyze(&BinutilsInspector::new(), &archive)
        .await
        .unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.get("a.o").unwrap().dependencies, names(&["b.o"]));
    assert!(graph.get("b.o").unwrap().is_leaf());
    let c = graph.get("c.o").unwrap();
    assert!(c.is_leaf());
    assert!(c.unresolved_global.iter().any(|s| s == "puts"));
}
