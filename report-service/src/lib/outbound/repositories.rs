pub mod sales_person;
