use std::fmt::Debug;

use futures::stream::{Stream, StreamExt};
use tokio::{sync::watch, task::JoinHandle};
use tokio_stream::wrappers::WatchStream;

/// A reactive value that can be watched for changes.
///
/// When the value changes, all watchers are notified automatically.
/// Each watcher gets the current value immediately when subscribing.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Set a new value and notify all watchers.
    ///
    /// Watchers are only woken if the value is different.
    pub(crate) fn set(&self, new_value: T)
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current != new_value {
                *current = new_value;
                true
            } else {
                false
            }
        });
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Watch for changes to this property.
    ///
    /// The stream immediately yields the current value, then yields
    /// whenever the value changes. It ends once every clone of the
    /// property has been dropped.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + use<T> {
        WatchStream::new(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A property refreshed by a background task on every tick of a trigger stream.
///
/// The sampling task owns the only writer besides this handle. Stopping or
/// dropping the handle aborts the task, so no tick outlives its consumer.
pub struct PolledProperty<T: Clone + Send + Sync + 'static> {
    property: Property<T>,
    task: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + PartialEq + 'static> PolledProperty<T> {
    /// Spawn the sampling task.
    ///
    /// `sample` is called once per item yielded by `ticks`; the property
    /// starts out holding `initial`. Must be called within a tokio runtime.
    pub fn spawn<S, F>(initial: T, mut ticks: S, mut sample: F) -> Self
    where
        S: Stream + Send + Unpin + 'static,
        F: FnMut() -> T + Send + 'static,
    {
        let property = Property::new(initial);
        let writer = property.clone();

        let task = tokio::spawn(async move {
            while ticks.next().await.is_some() {
                writer.set(sample());
            }
        });

        Self { property, task }
    }
}

impl<T: Clone + Send + Sync + 'static> PolledProperty<T> {
    /// Get the latest sampled value.
    pub fn get(&self) -> T {
        self.property.get()
    }

    /// Watch the sampled values.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + use<T> {
        self.property.watch()
    }

    /// Abort the sampling task. The last sampled value stays readable.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether the sampling task is still alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl<T: Clone + Send + Sync + 'static> Drop for PolledProperty<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
