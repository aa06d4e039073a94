use eyre::Result;

/// A trait for reading structured records. Modeled after the `Read` trait in the std.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record: Default;

    /// Read a single record from the input into the provided buffer.
    /// Returns `true` if a record was read and `false` if the end of the input was reached.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool>;

    /// Fill a buffer with records from the input. Returns the number of records read, which could
    /// be less than the length of the buffer or equals 0 if the end of the input is reached.
    fn read_records(&mut self, into: &mut [Self::Record]) -> Result<usize> {
        let mut n = 0;
        for record in into {
            if !self.read_record(record)? {
                break;
            }
            n += 1;
        }
        Ok(n)
    }

    /// Read all remaining records and append them to the provided buffer.
    /// Returns the number of records read.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;
        loop {
            let mut record = Self::Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}
