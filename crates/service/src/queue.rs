use base::error::{HeapError, OptionsError};
use base::options::QueueOptions;
use base::record::AdmissionRecord;
use heap::Heap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionReport {
    pub admitted: usize,
    pub rejected_full: usize,
    pub rejected_null: usize,
}

/// Admissions queue over shared patient records.
///
/// Records are stored as `Arc` handles, so [`AdmissionQueue::snapshot`] shares
/// them with the source queue instead of copying them.
#[derive(Debug, Clone)]
pub struct AdmissionQueue {
    heap: Heap<Arc<AdmissionRecord>>,
    options: QueueOptions,
}

impl AdmissionQueue {
    pub fn new(options: &QueueOptions) -> Result<Self, OptionsError> {
        options.check()?;
        let heap = Heap::new(options.capacity as usize).map_err(|e| {
            OptionsError::InvalidOptions {
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            heap,
            options: options.clone(),
        })
    }
    pub fn options(&self) -> &QueueOptions {
        &self.options
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }
    pub fn admit(&mut self, record: Option<AdmissionRecord>) -> Result<(), HeapError> {
        let Some(record) = record else {
            log::warn!("Rejected an absent record.");
            return Err(HeapError::NullRecord);
        };
        self.admit_shared(Arc::new(record))
    }
    pub fn admit_shared(&mut self, record: Arc<AdmissionRecord>) -> Result<(), HeapError> {
        let case_id = record.case_id.clone();
        match self.heap.push(record) {
            Ok(()) => {
                log::debug!("Admitted {case_id}, {} waiting.", self.heap.len());
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected {case_id}: {e}");
                Err(e)
            }
        }
    }
    pub fn admit_all<I>(&mut self, records: I) -> AdmissionReport
    where
        I: IntoIterator<Item = Option<AdmissionRecord>>,
    {
        let mut report = AdmissionReport::default();
        for record in records {
            match self.admit(record) {
                Ok(()) => report.admitted += 1,
                Err(HeapError::QueueFull) => report.rejected_full += 1,
                Err(HeapError::NullRecord) => report.rejected_null += 1,
                Err(e) => log::error!("Unexpected admission failure: {e}"),
            }
        }
        report
    }
    pub fn peek(&self) -> Result<&Arc<AdmissionRecord>, HeapError> {
        self.heap.peek()
    }
    /// Removes the record with the highest priority.
    pub fn pop(&mut self) -> Result<Arc<AdmissionRecord>, HeapError> {
        let record = self.heap.pop()?;
        log::debug!("Released {}, {} waiting.", record.case_id, self.heap.len());
        Ok(record)
    }
    pub fn clear(&mut self) {
        log::info!("Cleared {} records.", self.heap.len());
        self.heap.clear();
    }
    pub fn snapshot(&self) -> Self {
        Self {
            heap: self.heap.duplicate(),
            options: self.options.clone(),
        }
    }
    /// Sorted listing, cut to `limit` lines or else to the configured
    /// render limit.
    pub fn listing(&self, limit: Option<usize>) -> String {
        let rendered = self.heap.render();
        match limit.or(self.options.render_limit.map(|x| x as usize)) {
            Some(limit) => rendered.lines().take(limit).collect::<Vec<_>>().join("\n"),
            None => rendered,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use base::record::{Gender, Triage};

    fn options(capacity: u32) -> QueueOptions {
        QueueOptions {
            capacity,
            render_limit: None,
        }
    }

    fn patients() -> Vec<AdmissionRecord> {
        vec![
            AdmissionRecord::new(25, Gender::F, Triage::Green, 1),
            AdmissionRecord::new(80, Gender::M, Triage::Yellow, 2),
            AdmissionRecord::new(30, Gender::X, Triage::Red, 3),
            AdmissionRecord::new(75, Gender::F, Triage::Red, 4),
            AdmissionRecord::new(80, Gender::F, Triage::Yellow, 5),
        ]
    }

    #[test]
    fn test_invalid_options() {
        assert!(AdmissionQueue::new(&options(0)).is_err());
        let options = QueueOptions {
            capacity: 2,
            render_limit: Some(3),
        };
        assert!(AdmissionQueue::new(&options).is_err());
    }

    #[test]
    fn test_order() {
        let mut queue = AdmissionQueue::new(&options(5)).unwrap();
        let report = queue.admit_all(patients().into_iter().map(Some));
        assert_eq!(report.admitted, 5);
        assert_eq!(queue.peek().unwrap().case_id, "75F4");
        let order = std::iter::from_fn(|| queue.pop().ok())
            .map(|x| x.case_id.clone())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["75F4", "30X3", "80M2", "80F5", "25F1"]);
        assert_eq!(queue.pop().unwrap_err(), HeapError::EmptyQueue);
    }

    #[test]
    fn test_report() {
        let mut queue = AdmissionQueue::new(&options(3)).unwrap();
        let mut records = patients().into_iter().map(Some).collect::<Vec<_>>();
        records.insert(1, None);
        let report = queue.admit_all(records);
        assert_eq!(
            report,
            AdmissionReport {
                admitted: 3,
                rejected_full: 2,
                rejected_null: 1,
            }
        );
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.capacity(), 3);
    }

    #[test]
    fn test_snapshot_shares_records() {
        let mut queue = AdmissionQueue::new(&options(4)).unwrap();
        queue.admit_all(patients().into_iter().take(3).map(Some));
        let mut snapshot = queue.snapshot();
        let first = queue.pop().unwrap();
        assert_eq!(snapshot.len(), 3);
        assert!(Arc::ptr_eq(&first, snapshot.peek().unwrap()));
        snapshot.clear();
        assert!(snapshot.is_empty());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_listing() {
        let mut queue = AdmissionQueue::new(&QueueOptions {
            capacity: 5,
            render_limit: Some(2),
        })
        .unwrap();
        assert_eq!(queue.listing(None), "");
        queue.admit_all(patients().into_iter().map(Some));
        assert_eq!(
            queue.listing(None),
            "75F4: RED (age 75, F, arrival #4)\n30X3: RED (age 30, X, arrival #3)"
        );
        assert_eq!(queue.listing(Some(5)).lines().count(), 5);
        assert_eq!(queue.len(), 5);
    }
}
