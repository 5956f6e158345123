//! デバウンス
//!
//! タイマーは `Timer` トレイトで抽象化する（ブラウザでは gloo のタイマー、テストでは手動タイマー）。
//! ハンドルをdropすると保留中の呼び出しはキャンセルされる前提。

/// 遅延実行タイマー
pub trait Timer {
    /// dropで保留中のコールバックを取り消すハンドル
    type Handle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// 最後の呼び出しから `delay_ms` 経過した時点で1回だけ実行する
pub struct Debouncer<T: Timer> {
    timer: T,
    delay_ms: u32,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// 保留中の呼び出しを取り消し、タイマーを張り直す
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.timer.start(self.delay_ms, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
