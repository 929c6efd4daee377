pub mod itens;
