//! 터미널 출력 포맷팅 유틸리티
//!
//! 컴포넌트 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태의 제목 문자열을 만듭니다.
///
/// 텍스트는 가운데 정렬되며 세 줄(상단 테두리, 제목, 하단 테두리)로 구성됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING BOARD COMPONENTS        ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH - 1
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Creating Repository instances
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Repository instances created (5 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ PostRepository: ✓ Ready (posts)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 완료 요약을 출력합니다
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 BOARD COMPONENTS INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_boxed_title_layout() {
        let boxed = format_boxed_title("BOARD");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].contains("BOARD"));
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
        assert_eq!(lines[0].chars().count(), BOX_WIDTH + 2);
    }
}
