use Error;

/// Interpreter stack.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Stack<T> {
	data: Vec<T>,
}

impl<T> From<Vec<T>> for Stack<T> {
	fn from(v: Vec<T>) -> Self {
		Stack {
			data: v,
		}
	}
}

impl<T> Stack<T> {
	pub fn new() -> Self {
		Stack {
			data: Vec::new(),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn require(&self, len: usize) -> Result<(), Error> {
		if self.data.len() < len {
			return Err(Error::InvalidStackOperation);
		}
		Ok(())
	}

	pub fn last(&self) -> Result<&T, Error> {
		self.data.last().ok_or(Error::InvalidStackOperation)
	}

	pub fn last_mut(&mut self) -> Result<&mut T, Error> {
		self.data.last_mut().ok_or(Error::InvalidStackOperation)
	}

	pub fn pop(&mut self) -> Result<T, Error> {
		self.data.pop().ok_or(Error::InvalidStackOperation)
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value)
	}
}

impl<T> Stack<T> where T: Clone {
	/// Duplicates the top `i` items.
	pub fn dup(&mut self, i: usize) -> Result<(), Error> {
		self.require(i)?;
		let start = self.data.len() - i;
		let copy: Vec<T> = self.data[start..].to_vec();
		self.data.extend(copy);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use Error;
	use super::Stack;

	#[test]
	fn test_stack_pop_and_dup() {
		let mut stack: Stack<u8> = vec![1, 2].into();
		stack.dup(1).unwrap();
		assert_eq!(stack, vec![1, 2, 2].into());
		assert_eq!(stack.pop(), Ok(2));
		assert_eq!(stack.dup(3), Err(Error::InvalidStackOperation));
		stack.pop().unwrap();
		stack.pop().unwrap();
		assert_eq!(stack.pop(), Err(Error::InvalidStackOperation));
		assert!(stack.is_empty());
	}
}
