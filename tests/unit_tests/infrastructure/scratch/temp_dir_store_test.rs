use kuching::application::ports::ScratchStore;
use kuching::domain::RequestId;
use kuching::infrastructure::scratch::TempDirScratchStore;

#[tokio::test]
async fn given_acquire_when_called_then_creates_empty_file_with_suffix() {
    let store = TempDirScratchStore::new().unwrap();
    let request = RequestId::new();

    let file = store.acquire(request, ".wav").await.unwrap();

    assert!(file.path().exists());
    assert_eq!(std::fs::metadata(file.path()).unwrap().len(), 0);
    assert!(file.path().to_string_lossy().ends_with(".wav"));
    assert_eq!(file.suffix(), ".wav");
}

#[tokio::test]
async fn given_acquired_file_then_name_carries_request_id() {
    let store = TempDirScratchStore::new().unwrap();
    let request = RequestId::new();

    let file = store.acquire(request, ".mp3").await.unwrap();

    let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with(&request.to_string()));
}

#[tokio::test]
async fn given_same_request_when_acquiring_twice_then_paths_are_unique() {
    let store = TempDirScratchStore::new().unwrap();
    let request = RequestId::new();

    let first = store.acquire(request, ".wav").await.unwrap();
    let second = store.acquire(request, ".wav").await.unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_acquired_file_when_releasing_then_removed() {
    let store = TempDirScratchStore::new().unwrap();

    let file = store.acquire(RequestId::new(), ".wav").await.unwrap();
    store.release(&file).await.unwrap();

    assert!(!file.path().exists());
}

#[tokio::test]
async fn given_released_file_when_releasing_again_then_still_ok() {
    let store = TempDirScratchStore::new().unwrap();

    let file = store.acquire(RequestId::new(), ".wav").await.unwrap();
    store.release(&file).await.unwrap();

    assert!(store.release(&file).await.is_ok());
}

#[tokio::test]
async fn given_unreleased_files_when_store_dropped_then_directory_removed() {
    let root;
    {
        let store = TempDirScratchStore::new().unwrap();
        root = store.root_path().to_path_buf();
        store.acquire(RequestId::new(), ".wav").await.unwrap();
        assert!(root.exists());
    }

    assert!(!root.exists(), "scratch root should not outlive the store");
}
