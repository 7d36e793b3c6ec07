// 統合テストのエントリポイント
// tests/integration/ 配下の各テストモジュールを1つのテストバイナリにまとめる

mod fixtures;
mod test_cancellation;
mod test_error_handling;
