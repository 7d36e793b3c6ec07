// 中断フラグ - 外部（Ctrl+C等）からスキャンを止めるための共有フラグ

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 複製しても同じフラグを共有する中断シグナル
///
/// 一度立てたフラグは戻らない。
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    inner: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
