use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::application::ports::{AudioNormalizer, DurationProbe, ScratchStore, SpeechEngine};
use crate::application::services::{TranscriptionPipelineError, TranscriptionService};
use crate::domain::{Transcript, TranscriptionRequest};

pub struct TranscriptionJob {
    pub request: TranscriptionRequest,
    pub reply: oneshot::Sender<Result<Transcript, TranscriptionPipelineError>>,
}

/// A fixed-size set of workers draining a bounded job queue.
///
/// Worker count caps how many pipelines (and thus engine processes)
/// run at once; the queue bound is the backpressure point, making
/// submitters wait while the queue is full.
pub struct TranscriptionWorkerPool {
    sender: mpsc::Sender<TranscriptionJob>,
    workers: Vec<JoinHandle<()>>,
}

impl TranscriptionWorkerPool {
    pub fn spawn<S, N, E, D>(
        service: Arc<TranscriptionService<S, N, E, D>>,
        worker_count: usize,
        queue_depth: usize,
    ) -> Self
    where
        S: ScratchStore + 'static,
        N: AudioNormalizer + 'static,
        E: SpeechEngine + 'static,
        D: DurationProbe + 'static,
    {
        let (sender, receiver) = mpsc::channel(queue_depth.max(1));
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..worker_count.max(1))
            .map(|worker| {
                let receiver = Arc::clone(&receiver);
                let service = Arc::clone(&service);
                tokio::spawn(run_worker(worker, receiver, service))
            })
            .collect();

        Self { sender, workers }
    }

    /// Queues a request and waits for its transcript.
    pub async fn submit(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionPipelineError> {
        let (reply, receipt) = oneshot::channel();
        self.sender
            .send(TranscriptionJob { request, reply })
            .await
            .map_err(|_| TranscriptionPipelineError::WorkersUnavailable)?;
        receipt
            .await
            .map_err(|_| TranscriptionPipelineError::WorkersUnavailable)?
    }

    /// Closes the queue and waits for in-flight jobs to finish.
    pub async fn shutdown(self) {
        drop(self.sender);
        for (worker, handle) in self.workers.into_iter().enumerate() {
            if let Err(e) = handle.await {
                tracing::error!(worker, error = %e, "Transcription worker panicked");
            }
        }
    }
}

async fn run_worker<S, N, E, D>(
    worker: usize,
    receiver: Arc<Mutex<mpsc::Receiver<TranscriptionJob>>>,
    service: Arc<TranscriptionService<S, N, E, D>>,
) where
    S: ScratchStore,
    N: AudioNormalizer,
    E: SpeechEngine,
    D: DurationProbe,
{
    tracing::info!(worker, "Transcription worker started");
    loop {
        // Hold the queue lock only while waiting for a job, not while
        // running one.
        let job = receiver.lock().await.recv().await;
        let Some(job) = job else { break };

        let span = tracing::info_span!(
            "transcription_job",
            worker,
            format = %job.request.format,
            task = %job.request.task,
        );
        let result = service.transcribe(job.request).instrument(span).await;

        if let Err(e) = &result {
            tracing::error!(worker, error = %e, "Transcription job failed");
        }
        if job.reply.send(result).is_err() {
            tracing::warn!(worker, "Transcription job receipt dropped before delivery");
        }
    }
    tracing::info!(worker, "Transcription worker stopped: channel closed");
}
