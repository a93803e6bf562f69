use bytemuck::Pod;

/// Caller-owned storage for a run of equally sized records.
pub trait RecordBuffer {
    /// Size of one record in bytes.
    fn element_size(&self) -> usize;

    fn as_bytes(&self) -> &[u8];

    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Number of whole records, or 0 for zero-sized records.
    #[inline(always)]
    fn len(&self) -> usize {
        match self.element_size() {
            0 => 0,
            size => self.as_bytes().len() / size,
        }
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A record buffer whose length can change.
///
/// Growth happens on the caller's descriptor itself, so if the storage
/// moves, the caller's pointer, length and capacity follow it.
pub trait GrowableRecordBuffer: RecordBuffer {
    /// Appends one record. `record` must be exactly `element_size()` bytes.
    fn append_record(&mut self, record: &[u8]);

    fn truncate_records(&mut self, len: usize);
}

impl<ValueT: Pod> RecordBuffer for [ValueT] {
    #[inline(always)]
    fn element_size(&self) -> usize {
        std::mem::size_of::<ValueT>()
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        // Only zero-sized values fail to cast, and those hold no bytes.
        bytemuck::try_cast_slice(self).unwrap_or_default()
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::try_cast_slice_mut(self).unwrap_or_default()
    }
}

impl<ValueT: Pod> RecordBuffer for Vec<ValueT> {
    #[inline(always)]
    fn element_size(&self) -> usize {
        self.as_slice().element_size()
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice().as_bytes()
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice().as_bytes_mut()
    }
}

impl<ValueT: Pod> GrowableRecordBuffer for Vec<ValueT> {
    #[inline(always)]
    fn append_record(&mut self, record: &[u8]) {
        self.push(bytemuck::pod_read_unaligned(record));
    }

    #[inline(always)]
    fn truncate_records(&mut self, len: usize) {
        self.truncate(len);
    }
}

/// Untyped records of a run-time size in a caller-owned byte vector.
pub struct RawRecords<'a> {
    bytes: &'a mut Vec<u8>,
    element_size: usize,
}

impl<'a> RawRecords<'a> {
    pub fn new(bytes: &'a mut Vec<u8>, element_size: usize) -> Self {
        Self {
            bytes,
            element_size,
        }
    }
}

impl RecordBuffer for RawRecords<'_> {
    #[inline(always)]
    fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes.as_mut_slice()
    }
}

impl GrowableRecordBuffer for RawRecords<'_> {
    #[inline(always)]
    fn append_record(&mut self, record: &[u8]) {
        debug_assert!(record.len() == self.element_size);
        self.bytes.extend_from_slice(record);
    }

    #[inline(always)]
    fn truncate_records(&mut self, len: usize) {
        self.bytes.truncate(len * self.element_size);
    }
}

/// Untyped records of a run-time size in a fixed byte slice.
pub struct RawRecordsMut<'a> {
    bytes: &'a mut [u8],
    element_size: usize,
}

impl<'a> RawRecordsMut<'a> {
    pub fn new(bytes: &'a mut [u8], element_size: usize) -> Self {
        Self {
            bytes,
            element_size,
        }
    }
}

impl RecordBuffer for RawRecordsMut<'_> {
    #[inline(always)]
    fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}
